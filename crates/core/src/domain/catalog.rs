// Course Catalog
// The course structure is a static, hardcoded catalog mapping chapter
// slugs to display metadata. Disk is only consulted for documents,
// source files, and test runs.

use serde::{Deserialize, Serialize};

use crate::domain::chapter::ChapterSlug;

/// Display metadata for one chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMeta {
    pub name: String,
    pub slug: ChapterSlug,
    pub description: String,
}

impl ChapterMeta {
    fn new(name: &str, slug: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            // Hardcoded slugs are validated at catalog construction
            slug: ChapterSlug::new(slug).expect("catalog slug must be valid"),
            description: description.to_string(),
        }
    }
}

/// A titled group of chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub chapters: Vec<ChapterMeta>,
}

/// The whole course: an ordered list of sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStructure {
    pub sections: Vec<Section>,
}

impl CourseStructure {
    /// The standard "Learn Rust with Tests" course
    pub fn standard() -> Self {
        Self {
            sections: vec![
                Section {
                    title: "Fundamentals".to_string(),
                    chapters: vec![
                        ChapterMeta::new(
                            "Hello, world",
                            "hello-world",
                            "Your first Rust function with TDD",
                        ),
                        ChapterMeta::new(
                            "Integers",
                            "integers",
                            "Working with numbers and basic math",
                        ),
                        ChapterMeta::new("Iteration", "iteration", "Loops and ranges in Rust"),
                        ChapterMeta::new("Vectors", "vectors", "Working with Vec and slices"),
                        ChapterMeta::new("Structs", "structs", "Structs, methods, and state"),
                        ChapterMeta::new("HashMaps", "hashmaps", "Key-value collections"),
                        ChapterMeta::new(
                            "Error Handling",
                            "error-handling",
                            "Result, Option, and the ? operator",
                        ),
                    ],
                },
                Section {
                    title: "Advanced".to_string(),
                    chapters: vec![
                        ChapterMeta::new(
                            "Traits & Injection",
                            "traits-and-injection",
                            "Dependency injection with trait objects",
                        ),
                        ChapterMeta::new(
                            "Iterators",
                            "iterators",
                            "Lazy evaluation and custom iteration",
                        ),
                        ChapterMeta::new(
                            "Closures",
                            "closures",
                            "Higher-order functions and capture",
                        ),
                        ChapterMeta::new(
                            "Functional Patterns",
                            "functional",
                            "map, filter, and fold pipelines",
                        ),
                        ChapterMeta::new(
                            "Operator Overloading",
                            "operator-overloading",
                            "Add, Mul, and Display for your own types",
                        ),
                        ChapterMeta::new(
                            "Drop & RAII",
                            "drop-and-raii",
                            "Scope-bound cleanup with the Drop trait",
                        ),
                        ChapterMeta::new(
                            "Async/Await",
                            "async-await",
                            "Concurrent futures with tokio",
                        ),
                    ],
                },
            ],
        }
    }

    /// Look up chapter metadata by slug
    pub fn find(&self, slug: &ChapterSlug) -> Option<&ChapterMeta> {
        self.sections
            .iter()
            .flat_map(|s| s.chapters.iter())
            .find(|c| &c.slug == slug)
    }

    /// Total number of chapters across all sections
    pub fn chapter_count(&self) -> usize {
        self.sections.iter().map(|s| s.chapters.len()).sum()
    }
}

impl Default for CourseStructure {
    fn default() -> Self {
        Self::standard()
    }
}
