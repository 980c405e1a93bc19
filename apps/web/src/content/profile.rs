use crate::models::profile::{Education, Profile, ProfileLink, SkillSummary};

pub static PROFILE: Profile = Profile {
    name: "Nur Mohammad Farazi",
    headline: "Principal Software Engineer",
    location: "Dhaka, Bangladesh",
    phone: "+8801717369188",
    email: "nur369188@gmail.com",
    about: "Experienced Technical Project Manager and Principal Software Engineer with 14+ years delivering scalable software and cloud solutions. Proven track record leading cross-functional global teams, managing complex IT projects across web, mobile, and cloud platforms. Skilled in stakeholder alignment, crisis resolution, and project recovery, with a hands-on approach to solving real-world problems at scale.",
    leadership: &[
        "Led cross-functional teams of up to 12, delivering full-cycle projects across web, mobile, and cloud platforms.",
        "Defined scope, goals, and deliverables aligned with business objectives across multiple SaaS products.",
        "Managed timelines, sprints, and budgets using Agile (Scrum, Kanban) methodologies.",
        "Acted as primary liaison between technical teams, stakeholders, and external partners.",
        "Mentored junior team members and established a software engineer evaluation/growth framework.",
    ],
    skills: &[
        SkillSummary {
            label: "Paradigm",
            items: "SOLID, OOP, TDD, Clean Architecture, CQRS, Mediator, Hexagonal, Observer, Singleton, Factory, Module, Dynamic import, Functional, Reactive, Lazy Loading",
        },
        SkillSummary {
            label: "Development Stack",
            items: ".NET, Entity Framework, Node, Express, Angular, Ionic, RxJs, Bootstrap, MySQL, PostgreSQL, Redis, MongoDB, Firebase, AWS, gRPC, Blazor, CI/CD, SignalR, TypeScript",
        },
        SkillSummary {
            label: "Cloud Services",
            items: "Firebase, AWS (Lambda, S3, EC2, Beanstalk, SAM, VPN, Lightsail, API Gateway, Route 53, RDS)",
        },
    ],
    education: &[Education {
        degree: "BSc in Computer Science and Engineering",
        institution: "State University of Bangladesh",
        years: "2006 - 2010",
    }],
    links: &[
        ProfileLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/nurfarazi/",
            class: None,
        },
        ProfileLink {
            label: "GitHub",
            url: "https://github.com/nurfarazi",
            class: Some("github"),
        },
        ProfileLink {
            label: "Medium",
            url: "https://medium.com/@nur369188",
            class: Some("medium"),
        },
    ],
    articles_url: "https://medium.com/@nur369188",
};
