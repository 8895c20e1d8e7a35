// Sample catalog used for seeding demos and tests.
use shelfx_core::CatalogRecord;

fn record(
    id: u64,
    title: &str,
    author: &str,
    description: &str,
    category: &str,
    theme: &str,
    format: &str,
) -> CatalogRecord {
    CatalogRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        author: author.to_string(),
        category: Some(category.to_string()),
        theme: Some(theme.to_string()),
        format: Some(format.to_string()),
    }
}

/// Fifteen records spanning the standard topic vocabulary.
pub fn sample_records() -> Vec<CatalogRecord> {
    vec![
        record(
            1,
            "The Art of Programming",
            "John Smith",
            "A comprehensive guide to software development and coding practices, covering algorithms and data structures.",
            "Technology",
            "Education",
            "Hardcover",
        ),
        record(
            2,
            "Quantum Physics for Beginners",
            "Sarah Chen",
            "An accessible introduction to quantum mechanics and its fundamental principles.",
            "Science",
            "Education",
            "Digital",
        ),
        record(
            3,
            "The Last Symphony",
            "Maria Garcia",
            "A gripping novel about a talented musician discovering a mysterious composition in war-torn Europe.",
            "Fiction",
            "Mystery",
            "Paperback",
        ),
        record(
            4,
            "Sustainable Gardening",
            "James Wilson",
            "Learn practical techniques for creating and maintaining an eco-friendly garden in any climate.",
            "Gardening",
            "Sustainability",
            "Digital",
        ),
        record(
            5,
            "Modern Architecture",
            "Emma Thompson",
            "Explore contemporary architectural designs and their impact on urban landscapes.",
            "Architecture",
            "Design",
            "Hardcover",
        ),
        record(
            6,
            "The Psychology of Decision Making",
            "Dr. Michael Lee",
            "Understanding how humans make choices and what influences their decisions.",
            "Psychology",
            "Science",
            "Digital",
        ),
        record(
            7,
            "World Cuisine Mastery",
            "Chef Ana Patel",
            "Master the art of cooking with recipes and techniques from different cultures around the globe.",
            "Cooking",
            "Culture",
            "Hardcover",
        ),
        record(
            8,
            "Financial Freedom",
            "Robert Chang",
            "A practical guide to personal finance, investment strategies, and building long-term wealth.",
            "Finance",
            "Education",
            "Digital",
        ),
        record(
            9,
            "The Art of Photography",
            "David Martinez",
            "Learn advanced photography techniques and artistic composition for stunning images.",
            "Photography",
            "Art",
            "Digital",
        ),
        record(
            10,
            "Ancient Civilizations",
            "Dr. Elizabeth Brown",
            "Discover the fascinating history of ancient cultures and their lasting impact on modern society.",
            "History",
            "Education",
            "Paperback",
        ),
        record(
            11,
            "Space Exploration",
            "Neil Anderson",
            "A journey through the past, present, and future of human space exploration and discovery.",
            "Science",
            "Technology",
            "Digital",
        ),
        record(
            12,
            "The Digital Marketing Handbook",
            "Lisa Zhang",
            "Comprehensive strategies for modern digital marketing and online business growth.",
            "Marketing",
            "Business",
            "Digital",
        ),
        record(
            13,
            "Mindful Living",
            "Dr. Sarah Palmer",
            "Practical approaches to mindfulness and meditation for a balanced, stress-free life.",
            "Self-Help",
            "Wellness",
            "Paperback",
        ),
        record(
            14,
            "The Future of AI",
            "Dr. James Lee",
            "Exploring artificial intelligence advancements and their impact on society and technology.",
            "Technology",
            "Science",
            "Digital",
        ),
        record(
            15,
            "Classical Music Appreciation",
            "Thomas Wagner",
            "Understanding and enjoying classical music compositions from different eras.",
            "Music",
            "Art",
            "Digital",
        ),
    ]
}
