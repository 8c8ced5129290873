//! Catalog shipped with the site when no catalog file is present

use super::{Article, Project};

fn article(id: &str, title: &str, date: &str, read_time: &str, excerpt: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        excerpt: excerpt.to_string(),
        file: format!("articles/{}.md", id),
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    tech: &[&str],
    github: &str,
    demo: Option<&str>,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        github: Some(github.to_string()),
        demo: demo.map(str::to_string),
        file: format!("projects/{}.md", id),
    }
}

pub(super) fn articles() -> Vec<Article> {
    vec![
        article(
            "event-loops-deep-dive",
            "Understanding Event Loops: A Deep Dive into Asynchronous Programming",
            "2024-03-15",
            "8 min read",
            "Exploring the fundamentals of event-driven programming and how modern systems handle thousands of concurrent connections efficiently. We'll look at different implementations across languages and their trade-offs.",
        ),
        article(
            "memory-management-systems",
            "Memory Management in Systems Programming",
            "2024-03-10",
            "12 min read",
            "A comprehensive guide to memory allocation strategies, garbage collection algorithms, and manual memory management. Understanding when and how to optimize memory usage in different scenarios.",
        ),
        article(
            "static-site-generator",
            "Building a Static Site Generator from Scratch",
            "2024-03-05",
            "6 min read",
            "Step-by-step guide to creating your own static site generator using modern tools. We'll cover templating, markdown processing, and deployment strategies for GitHub Pages.",
        ),
    ]
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        project(
            "distributed-task-queue",
            "Distributed Task Queue",
            "A high-performance task queue system built with Rust, featuring automatic failover, load balancing, and monitoring capabilities for processing millions of tasks per day.",
            &["Rust", "Redis", "Docker", "Kubernetes"],
            "https://github.com/yourusername/distributed-task-queue",
            None,
        ),
        project(
            "http2-server",
            "HTTP/2 Server Implementation",
            "Custom HTTP/2 server written from scratch to understand the protocol internals, featuring multiplexing, server push, and header compression.",
            &["Go", "HTTP/2", "TLS"],
            "https://github.com/yourusername/http2-server",
            None,
        ),
        project(
            "realtime-data-pipeline",
            "Real-time Data Pipeline",
            "Stream processing system for handling real-time analytics data with low latency requirements. Processes over 100k events per second with sub-100ms latency.",
            &["Apache Kafka", "Go", "ClickHouse", "Grafana"],
            "https://github.com/yourusername/realtime-pipeline",
            Some("https://demo.yourpipeline.com"),
        ),
    ]
}
