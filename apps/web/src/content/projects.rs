//! Project showcase table and lookups.

use crate::content::priority::sort_by_priority;
use crate::models::project::{MediaKind, Project, ProjectLink, ProjectMedia, TechCategory};

const fn image(src: &'static str, alt: &'static str) -> ProjectMedia {
    ProjectMedia {
        kind: MediaKind::Image,
        src,
        alt,
        poster: None,
    }
}

const fn youtube(src: &'static str, alt: &'static str, poster: &'static str) -> ProjectMedia {
    ProjectMedia {
        kind: MediaKind::Youtube,
        src,
        alt,
        poster: Some(poster),
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "evv",
        priority: Some(10),
        title: "EVV (Electronic Visit Verification)",
        tagline: "EVV (Electronic Visit Verification) platform for healthcare providers",
        preview: image("/assets/1.png", "EVV dashboard preview"),
        media_gallery: &[
            youtube(
                "https://www.youtube.com/watch?v=3UM9NV9T4qQ",
                "EVV platform walk-through on YouTube",
                "https://i.ytimg.com/vi/3UM9NV9T4qQ/hqdefault.jpg",
            ),
            image("/assets/evv_img_0.png", "Mobile app visit verification screen"),
        ],
        description: &[
            "Developed a full-featured Electronic Visit Verification (EVV) platform for healthcare agencies to manage caregiver scheduling, visit tracking, and billing. Built with .NET Core API and Angular web app, the solution ensures HIPAA compliance, role-based security, timezone-accurate scheduling, and automated invoice generation. The system improved caregiver compliance, reduced billing errors, and streamlined agency operations.",
            "The system integrates real-time visit verification, scheduling, and reporting to streamline home healthcare services.",
        ],
        features: &[
            "Real-time GPS and biometric verification to ensure visit authenticity",
            "Automated scheduling and dispatching to optimise caregiver routes",
            "Comprehensive reporting tools for compliance and performance tracking",
        ],
        tech_tags: &["Angular", "TypeScript", ".NET 8", "MongoDB", "AWS", "Docker"],
        tech_categories: &[
            TechCategory { label: "Frontend", items: &["Angular 20", "RxJS"] },
            TechCategory { label: "Backend", items: &[".NET 8", "MongoDB"] },
            TechCategory {
                label: "Cloud",
                items: &["AWS Lambda", "S3", "CloudFront", "Docker", "AWS SNS", "AWS SQS"],
            },
        ],
        links: &[ProjectLink {
            label: "Live Demo",
            url: "https://www.youtube.com/watch?v=q7eaaCWpB7U",
        }],
        role: Some("Product Engineer & Technical Lead"),
        duration: Some("Jan 2024 - Ongoing"),
        challenges: &[
            "Ensuring data security and compliance with healthcare regulations",
            "Designing a scalable architecture to handle peak loads during emergencies",
            "Implementing real-time monitoring and alerting for critical workflows",
            "Integrating with third-party services while maintaining data integrity",
            "Optimising performance for low-bandwidth environments",
        ],
    },
    Project {
        id: "hand",
        priority: Some(20),
        title: "Hand Tracking SDK for AR/VR",
        tagline: "Hand tracking solution for immersive experiences in AR/VR",
        preview: image("/assets/2.png", "Hand tracking SDK preview"),
        media_gallery: &[image("/assets/2.png", "Atlas modular component builder")],
        description: &[
            "Hand Tracking SDK provides accurate and responsive hand tracking capabilities for AR/VR applications.",
            "The SDK is designed to be easy to integrate, with a focus on performance and reliability.",
        ],
        features: &[
            "Accurate hand tracking with low latency",
            "Robust gesture recognition for intuitive interactions",
            "Seamless integration with popular AR/VR frameworks",
        ],
        tech_tags: &["Python", "OpenCV"],
        tech_categories: &[
            TechCategory { label: "Frontend", items: &["React"] },
            TechCategory { label: "Backend", items: &["Python"] },
            TechCategory { label: "Cloud", items: &["Google Cloud"] },
        ],
        links: &[ProjectLink {
            label: "Live Demo",
            url: "https://www.youtube.com/watch?v=q7eaaCWpB7U",
        }],
        role: Some("Lead Developer"),
        duration: Some("May 2015 - Dec 2015"),
        challenges: &[],
    },
    Project {
        id: "surveillance-footage-consolidator",
        priority: Some(30),
        title: "Surveillance Footage Consolidator",
        tagline: "Automated processing and analysis of surveillance footage",
        preview: image(
            "/assets/surveillance_preview.png",
            "Surveillance Footage Consolidator preview",
        ),
        media_gallery: &[],
        description: &[
            "TideLabs centralises experimental findings, datasets, and team rituals so data scientists can iterate quickly without losing context.",
            "Automations bring relevant documentation into the workflow and trigger environment provisioning on demand.",
        ],
        features: &[
            "Notebook synchronisation with automatic changelog generation",
            "Automated environment setup with one-click teardown",
            "Cross-team retrospectives and insights surfaced by AI summaries",
        ],
        tech_tags: &["React", "NestJS", "PostgreSQL", "Kubernetes"],
        tech_categories: &[
            TechCategory { label: "Frontend", items: &["React 18", "Zustand", "Framer Motion"] },
            TechCategory { label: "Backend", items: &["NestJS", "GraphQL", "Hasura"] },
            TechCategory { label: "Cloud", items: &["GKE", "ArgoCD", "BigQuery"] },
        ],
        links: &[ProjectLink {
            label: "Live Portal",
            url: "https://example.com/tidelabs",
        }],
        role: Some("Founding Engineer"),
        duration: Some("Jul 2022 - Present"),
        challenges: &[
            "Abstracting complex data governance policies into lightweight controls",
            "Maintaining fast onboarding despite infrastructure complexity",
        ],
    },
    Project {
        id: "poplin",
        priority: Some(40),
        title: "poplin (wash-dry-fold)",
        tagline: "Scalable laundry service platform with app-based pickup and workflows",
        preview: image("/assets/poplin_preview.png", "poplin laundry service app preview"),
        media_gallery: &[youtube(
            "https://www.youtube.com/shorts/da-Xs6h4tBo",
            "poplin laundry service demo on YouTube",
            "https://i.ytimg.com/vi/da-Xs6h4tBo/hqdefault.jpg",
        )],
        description: &[
            "I contributed as a Backend Engineer to build a scalable laundry service platform with app-based pickup and wash-dry-fold workflows. I engineered REST APIs, optimized order management and pricing logic, and improved delivery tracking.",
            "Focused on performance, security, and reliable transaction processing to support nationwide operations and seamless user experience.",
        ],
        features: &[
            "REST API development for order management and pricing",
            "Optimized order management and pricing logic",
            "Improved delivery tracking system",
            "Transaction processing for nationwide operations",
        ],
        tech_tags: &["Node.js", "API Development"],
        tech_categories: &[TechCategory { label: "Backend", items: &["Node.js", "REST APIs"] }],
        links: &[
            ProjectLink { label: "Visit Website", url: "https://poplin.co/" },
            ProjectLink {
                label: "Watch Demo",
                url: "https://www.youtube.com/shorts/da-Xs6h4tBo",
            },
        ],
        role: Some("Backend Engineer"),
        duration: Some("Nov 2025"),
        challenges: &[],
    },
    Project {
        id: "bandscore9",
        priority: Some(50),
        title: "Bandscore9",
        tagline: "IELTS mock tests and skill evaluation platform",
        preview: image("/assets/bandscore9_preview.png", "Bandscore9 IELTS platform preview"),
        media_gallery: &[youtube(
            "https://www.youtube.com/watch?v=WMt9LA3bYKo",
            "Bandscore9 platform demo on YouTube",
            "https://i.ytimg.com/vi/WMt9LA3bYKo/hqdefault.jpg",
        )],
        description: &[
            "As the DevOps Engineer responsible for the Continuous Integration and Continuous Deployment (CI/CD) pipeline, I designed and implemented a robust automation framework that ensures seamless integration and deployment of new features.",
            "The platform provides authentic IELTS mock tests and skill evaluation, catering to candidates to evaluate their IELTS skills and know where they stand.",
        ],
        features: &[
            "Robust CI/CD automation framework",
            "Seamless feature integration and deployment",
            "Authentic IELTS mock tests with multiple difficulty levels",
            "Comprehensive skill evaluation and progress tracking",
        ],
        tech_tags: &["CI/CD", "Node.js", "NestJS", "ExpressJS"],
        tech_categories: &[
            TechCategory { label: "DevOps", items: &["CI/CD", "Automation"] },
            TechCategory { label: "Backend", items: &["Node.js", "NestJS", "ExpressJS"] },
        ],
        links: &[
            ProjectLink { label: "Visit Website", url: "https://www.bandscore9.com/" },
            ProjectLink {
                label: "Watch Demo",
                url: "https://www.youtube.com/watch?v=WMt9LA3bYKo",
            },
        ],
        role: Some("DevOps Engineer"),
        duration: Some("Oct 2025"),
        challenges: &[],
    },
    Project {
        id: "cholpori",
        priority: Some(60),
        title: "CholPori (LMS)",
        tagline: "Interactive learning platform with multimedia lessons and quizzes",
        preview: image("/assets/cholpori_preview.png", "CholPori LMS platform preview"),
        media_gallery: &[
            youtube(
                "https://www.youtube.com/watch?v=px8c9T6c1jA",
                "CholPori platform demo on YouTube",
                "https://i.ytimg.com/vi/px8c9T6c1jA/hqdefault.jpg",
            ),
            youtube(
                "https://www.youtube.com/watch?v=POZxRHv2Tls",
                "CholPori impact programs showcase on YouTube",
                "https://i.ytimg.com/vi/POZxRHv2Tls/hqdefault.jpg",
            ),
        ],
        description: &[
            "I was the Lead Developer and System Architect for CholPori, an interactive learning platform that lets teachers build multimedia lessons with quizzes and read-aloud books. I designed the system using .NET Core, Angular, Firebase, and Docker, ensuring scalability, speed, and a kid-friendly experience.",
            "The platform now supports thousands of students and teachers through engaging, real-time learning tools that make education more accessible and interactive.",
        ],
        features: &[
            "Multimedia lesson builder with quizzes and read-aloud functionality",
            "Kid-friendly user interface design",
            "Real-time learning experience with interactive tools",
            "Scalable architecture supporting thousands of concurrent users",
            "Firebase integration for real-time data synchronization",
        ],
        tech_tags: &[".NET Core", "Angular", "API", "Firebase", "Docker"],
        tech_categories: &[
            TechCategory { label: "Frontend", items: &["Angular"] },
            TechCategory { label: "Backend", items: &[".NET Core", "REST APIs"] },
            TechCategory { label: "Cloud", items: &["Firebase", "Docker"] },
        ],
        links: &[
            ProjectLink { label: "Visit Website", url: "https://cholpori.com/" },
            ProjectLink {
                label: "Watch Demo",
                url: "https://www.youtube.com/watch?v=px8c9T6c1jA",
            },
            ProjectLink {
                label: "Impact Programs",
                url: "https://www.youtube.com/watch?v=POZxRHv2Tls",
            },
        ],
        role: Some("Lead Developer & System Architect"),
        duration: Some("Oct 2025"),
        challenges: &[],
    },
    Project {
        id: "automated-data-pipeline",
        priority: Some(70),
        title: "Automated Data Pipeline",
        tagline: "End-to-end Excel to Google Sheets data automation solution",
        preview: image(
            "/assets/automated_data_pipeline_preview.png",
            "Automated Data Pipeline preview",
        ),
        media_gallery: &[],
        description: &[
            "I engineered an end-to-end solution to automate a tedious, error-prone Excel to Google Sheets data transfer process. As the sole developer, I built a robust Python script using pandas and the Google Sheets API, then scheduled it for autonomous execution.",
            "My work eliminated 100% of manual effort, removed the risk of human error, and empowered the team with consistently accurate, real-time data. This automation transformed their workflow, saving hours of labor and boosting operational efficiency.",
        ],
        features: &[
            "Automated Excel data extraction using pandas",
            "Google Sheets API integration for seamless data transfer",
            "Scheduled autonomous execution",
            "100% elimination of manual data entry effort",
            "Error handling and validation mechanisms",
            "Real-time data accuracy and consistency",
        ],
        tech_tags: &["Python", "Automation", "Scheduling Software"],
        tech_categories: &[
            TechCategory { label: "Backend", items: &["Python", "pandas"] },
            TechCategory { label: "Automation", items: &["Google Sheets API", "Scheduling"] },
        ],
        links: &[ProjectLink {
            label: "View on GitHub",
            url: "https://github.com/nurfarazi/Excel2Google_AutoPilot",
        }],
        role: Some("Lead Developer"),
        duration: Some("Oct 2025"),
        challenges: &[],
    },
];

/// Canonical form used for id comparison: surrounding whitespace dropped, lowercased.
pub fn normalize_project_id(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Looks up a project by identifier, ignoring case and surrounding whitespace.
pub fn find_project(project_id: &str) -> Option<&'static Project> {
    let wanted = normalize_project_id(project_id);
    PROJECTS
        .iter()
        .find(|project| normalize_project_id(project.id) == wanted)
}

/// All projects in listing order.
pub fn projects_by_priority() -> Vec<&'static Project> {
    sort_by_priority(PROJECTS)
}
