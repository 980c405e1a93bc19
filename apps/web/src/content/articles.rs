//! Knowledge base: article index and category filter.

use crate::models::article::KnowledgeArticle;

/// Pseudo-category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Filter buttons, in display order.
pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Architecture",
    "Design Patterns",
    "Frontend",
    "System Design",
    "Performance",
];

pub static ARTICLES: &[KnowledgeArticle] = &[
    KnowledgeArticle {
        id: "1",
        title: "Building Scalable Microservices with .NET 8 and gRPC",
        category: "Architecture",
        year: 2024,
        month: 12,
        read_time: "12 min read",
        excerpt: "Learn how to architect and implement a production-ready microservices system using .NET 8, gRPC for inter-service communication, and RabbitMQ for event-driven patterns. This comprehensive guide covers service design, API gateways, and deployment strategies.",
        tags: &[".NET 8", "Microservices", "gRPC", "RabbitMQ", "Docker"],
        link: "https://nur369188.medium.com/when-grpc-is-and-isnt-the-right-call-88beb208ed37",
    },
    KnowledgeArticle {
        id: "2",
        title: "Mastering CQRS Pattern in C#",
        category: "Design Patterns",
        year: 2024,
        month: 11,
        read_time: "10 min read",
        excerpt: "Deep dive into Command Query Responsibility Segregation (CQRS) pattern implementation in C#. Explore real-world scenarios, performance benefits, and best practices for separating read and write operations in complex applications.",
        tags: &["C#", "CQRS", "Design Patterns", "System Design"],
        link: "https://medium.com/@nur369188",
    },
    KnowledgeArticle {
        id: "3",
        title: "Angular Performance Optimization Techniques",
        category: "Frontend",
        year: 2024,
        month: 10,
        read_time: "15 min read",
        excerpt: "Comprehensive guide to optimizing Angular applications for production. Covers change detection strategies, lazy loading, bundle optimization, and advanced RxJS patterns for building high-performance web applications.",
        tags: &["Angular", "TypeScript", "RxJS", "Performance"],
        link: "https://medium.com/@nur369188",
    },
    KnowledgeArticle {
        id: "4",
        title: "System Design: Building Fault-Tolerant Email Systems",
        category: "System Design",
        year: 2024,
        month: 9,
        read_time: "18 min read",
        excerpt: "Case study on designing a resilient email delivery system with automatic failover across multiple providers. Discusses circuit breaker patterns, retry strategies, and monitoring for distributed systems.",
        tags: &["System Design", "Resilience", "C#", "Architecture"],
        link: "https://medium.com/@nur369188",
    },
    KnowledgeArticle {
        id: "5",
        title: "Clean Architecture in .NET: A Practical Guide",
        category: "Architecture",
        year: 2024,
        month: 8,
        read_time: "14 min read",
        excerpt: "Implementing Clean Architecture principles in .NET applications. Learn about dependency inversion, domain-driven design, and creating maintainable, testable codebases that stand the test of time.",
        tags: &[".NET", "Clean Architecture", "DDD", "SOLID"],
        link: "https://medium.com/@nur369188",
    },
    KnowledgeArticle {
        id: "6",
        title: "Concurrency and Threading Best Practices in C#",
        category: "Performance",
        year: 2024,
        month: 7,
        read_time: "16 min read",
        excerpt: "Master thread-safe programming in C#. Explore concurrent collections, async/await patterns, parallel programming, and techniques for preventing race conditions and deadlocks in multithreaded applications.",
        tags: &["C#", "Threading", "Concurrency", "Async/Await"],
        link: "https://nur369188.medium.com/how-i-think-about-concurrency-and-threading-in-c-a99340d19eed",
    },
];

/// Resolves a requested filter to one of `CATEGORIES`. Unknown or missing
/// values select `All`.
pub fn resolve_category(requested: Option<&str>) -> &'static str {
    requested
        .map(str::trim)
        .and_then(|wanted| CATEGORIES.iter().copied().find(|c| *c == wanted))
        .unwrap_or(ALL_CATEGORIES)
}

/// Articles in `category`, newest first. `All` returns every article.
pub fn filter_by_category(category: &str) -> Vec<&'static KnowledgeArticle> {
    let mut articles: Vec<&KnowledgeArticle> = ARTICLES
        .iter()
        .filter(|article| category == ALL_CATEGORIES || article.category == category)
        .collect();
    articles.sort_by(|a, b| b.published().cmp(&a.published()));
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_every_article() {
        assert_eq!(filter_by_category(ALL_CATEGORIES).len(), ARTICLES.len());
    }

    #[test]
    fn test_filter_exact_category() {
        let ids: Vec<&str> = filter_by_category("Architecture").iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        assert!(filter_by_category("architecture").is_empty());
    }

    #[test]
    fn test_newest_first() {
        let all = filter_by_category(ALL_CATEGORIES);
        assert_eq!(all.first().map(|a| a.id), Some("1"));
        assert_eq!(all.last().map(|a| a.id), Some("6"));
    }

    #[test]
    fn test_resolve_category() {
        assert_eq!(resolve_category(None), ALL_CATEGORIES);
        assert_eq!(resolve_category(Some("Frontend")), "Frontend");
        assert_eq!(resolve_category(Some(" Frontend ")), "Frontend");
        assert_eq!(resolve_category(Some("Cooking")), ALL_CATEGORIES);
    }

    #[test]
    fn test_every_article_category_is_filterable() {
        for article in ARTICLES {
            assert!(CATEGORIES.contains(&article.category), "{}", article.category);
        }
    }
}
