//! Work history and headline achievements.

use crate::content::priority::sort_by_priority;
use crate::models::career::{Achievement, KeyMetric, WorkExperience};

pub static WORK_EXPERIENCES: &[WorkExperience] = &[
    WorkExperience {
        company: "Kaz Software",
        position: "Principal Software Engineer",
        duration: "July 2022 - Current",
        description: "Architected and launched a scalable SaaS platform, managing end-to-end delivery across product requirements, team capacity, and Agile sprint cycles.",
        achievements: &[
            "Shipped the platform within 2 months, enabling $50K/year in client expansion and reducing AWS infrastructure costs by 40%",
            "Led a globally distributed team of 12 engineers and QA professionals, fostering collaboration and accountability",
            "Standardized coding and documentation practices, improving engineering consistency and onboarding speed by 30%",
            "Partnered with stakeholders to define scope, prioritize backlogs, and align delivery with evolving business goals",
            "Conducted regular code reviews and mentorship sessions to elevate team performance",
            "Enforced best practices for software reliability, security, and scalability across the SDLC",
        ],
        summary: "Developed and managed scalable SaaS products, led a global team, and implemented best practices for software development.",
        key_metric: Some(KeyMetric { label: "Team Led", value: "12" }),
        year_start: Some(2022),
        year_end: Some(2025),
        badge_color: "#646CFF",
    },
    WorkExperience {
        company: "CholPori",
        position: "Technical Lead",
        duration: "Oct 2020 - June 2022",
        description: "Led critical infrastructure development and resolved delivery bottlenecks for a kid-friendly digital education platform.",
        achievements: &[
            "Led a 12-member cross-functional team to design and deliver an education platform from ground up",
            "Developed a no-code, drag-and-drop lesson builder with interactive features",
            "Engineered a real-time content-serving system with live student performance insights",
            "Managed full SDLC using .NET Core, Angular, Firebase, and Docker",
            "Implemented a company-wide software engineer evaluation framework",
        ],
        summary: "Developed no-code multimedia lesson builder and led a software and UX team to build an education platform.",
        key_metric: Some(KeyMetric { label: "Team Led", value: "12" }),
        year_start: Some(2020),
        year_end: Some(2022),
        badge_color: "#10B981",
    },
    WorkExperience {
        company: "Jeeon Bangladesh Ltd",
        position: "Senior Software Engineer",
        duration: "June 2016 - Sept 2020",
        description: "Developed innovative healthcare solutions focusing on accessibility and offline capabilities.",
        achievements: &[
            "Launched an SMS-based medicine ordering system, increasing DAU by 55% with 10,000+ users",
            "Built and maintained a reliable eHealth payments platform",
            "Led development of high-availability systems with end-to-end responsibility",
            "Established efficient build and testing pipelines using Docker and CI/CD",
            "Enhanced product workflows with real-time features using Socket.IO and RxJS",
        ],
        summary: "Designed and developed an SMS-based ordering system and worked on all aspects of development including front-end, back-end, database, and mobile app.",
        key_metric: Some(KeyMetric { label: "DAU Growth", value: "55%" }),
        year_start: Some(2016),
        year_end: Some(2020),
        badge_color: "#EF4444",
    },
    WorkExperience {
        company: "AGD IT SOLUTION Sdn Bhd",
        position: "Senior Software Engineer",
        duration: "April 2015 - May 2016",
        description: "Led development of a scalable vehicle tracking system with real-time capabilities.",
        achievements: &[
            "Led a team of 6 engineers to build a tracking system using Node.js and Google Maps API",
            "Designed microservices architecture for improved fault tolerance",
            "Reduced deployment time by 50% through automated pipelines",
            "Integrated real-time tracking features using Ionic and Objective-C",
        ],
        summary: "Led a team in the design and development of a vehicle tracking solution and implemented a robust software data architecture.",
        key_metric: Some(KeyMetric { label: "Deployment Speed", value: "50%" }),
        year_start: Some(2015),
        year_end: Some(2016),
        badge_color: "#3B82F6",
    },
    WorkExperience {
        company: "Dream71 Bangladesh Ltd",
        position: "Senior Software Engineer",
        duration: "Oct 2014 - April 2015",
        description: "Specialized in real-time applications and game development.",
        achievements: &[
            "Built a real-time cricket dashboard with minimal latency",
            "Led Unity3D game development with successful user retention",
            "Streamlined asset integration and build automation",
        ],
        summary: "Developed a real-time cricket dashboard app and led a team of game developers in Unity3D.",
        key_metric: Some(KeyMetric { label: "Real-time", value: "Gaming" }),
        year_start: Some(2014),
        year_end: Some(2015),
        badge_color: "#F59E0B",
    },
    WorkExperience {
        company: "Independent Game Developer",
        position: "Freelance Developer",
        duration: "April 2013 - Sept 2014",
        description: "Developed custom 2D games for international clients.",
        achievements: &[
            "Created games using Objective-C, C#, Cocos2D, and Box2D",
            "Delivered high-quality solutions across multiple game genres",
            "Managed full development cycles independently",
        ],
        summary: "Developed games for international clients and ensured error-free code and sound design.",
        key_metric: Some(KeyMetric { label: "Projects", value: "20+" }),
        year_start: Some(2013),
        year_end: Some(2014),
        badge_color: "#00D9FF",
    },
    WorkExperience {
        company: "Rise Up Labs",
        position: "Creative Director",
        duration: "Nov 2011 - Sept 2012",
        description: "Led game design and development direction.",
        achievements: &[
            "Directed game logic and level design teams",
            "Created engaging game mechanics and environments",
            "Delivered polished games on schedule",
        ],
        summary: "Led game logic design team and created immersive game environments.",
        key_metric: Some(KeyMetric { label: "Leadership", value: "3+ Teams" }),
        year_start: Some(2011),
        year_end: Some(2012),
        badge_color: "#EC4899",
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "evv-healthcare",
        title: "EVV Healthcare Compliance SaaS Platform",
        company: "Kaz Software",
        role: "Technical Project Manager & Architect",
        challenge: "Design multi-tenant SaaS platform meeting US healthcare compliance requirements within an aggressive 8 month timeline.",
        solution: "Architected microservices-based system, led 12-person distributed team using Agile practices.",
        tech_stack: &[
            ".NET Core",
            "Angular",
            "PostgreSQL",
            "AWS (Lambda, RDS, EC2)",
            "Docker",
            "CI/CD",
        ],
        outcomes: &[
            "Delivered MVP in 2 months enabling $50K/year client expansion",
            "Reduced AWS costs by 40%",
            "Achieved 99.9% uptime",
        ],
        priority: Some(1),
    },
    Achievement {
        id: "cholpori-edtech",
        title: "EdTech Digital Learning Platform",
        company: "CholPori",
        role: "Technical Lead & Project Manager",
        challenge: "Rescue delayed project and deliver comprehensive kid-friendly education platform",
        solution: "Restructured team workflows with defined roles and responsibilities, implemented daily standups with assigned accountability partners, designed real-time content delivery systems with shared success metrics.",
        tech_stack: &[".NET Core", "Angular", "Firebase", "SignalR", "AWS", "Docker"],
        outcomes: &[
            "Recovered 3-month delay",
            "Built drag-and-drop lesson builder reducing content creation time by 70%",
            "Real-time insights adopted by 100+ educators",
        ],
        priority: Some(2),
    },
    Achievement {
        id: "jeeon-healthcare",
        title: "Healthcare Payments & Medicine Ordering System",
        company: "Jeeon Bangladesh",
        role: "Senior Software Engineer",
        challenge: "Enable medicine ordering for users without reliable internet connectivity",
        solution: "Designed SMS-based offline-first ordering system with automated payment integration",
        tech_stack: &["Node.js", ".NET Core", "Kotlin", "Angular", "Firebase", "Socket.IO"],
        outcomes: &[
            "Reached 500+ active users within 2 months",
            "Increased DAU by 55%",
            "Established reputation as reliable eHealth solution provider",
        ],
        priority: Some(3),
    },
];

/// Achievements shown on the career page by default.
pub const DEFAULT_TOP_ACHIEVEMENTS: usize = 3;

/// The `count` highest-priority achievements.
pub fn top_achievements(count: usize) -> Vec<&'static Achievement> {
    let mut sorted = sort_by_priority(ACHIEVEMENTS);
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_achievements_respects_count() {
        assert_eq!(top_achievements(1).len(), 1);
        assert_eq!(top_achievements(0).len(), 0);
        assert_eq!(top_achievements(50).len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_top_achievement_is_highest_priority() {
        assert_eq!(top_achievements(1)[0].id, "evv-healthcare");
    }

    #[test]
    fn test_work_history_is_newest_first() {
        let starts: Vec<u16> = WORK_EXPERIENCES.iter().filter_map(|w| w.year_start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_monogram() {
        assert_eq!(WORK_EXPERIENCES[0].monogram(), "KS");
        assert_eq!(WORK_EXPERIENCES[1].monogram(), "C");
        assert_eq!(WORK_EXPERIENCES[2].monogram(), "JB");
    }
}
