//! HashMaps - key-value lookups and the entry API

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub age: u8,
    pub major: String,
}

/// Registry of students keyed by name.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: HashMap<String, Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, age: u8, major: impl Into<String>) {
        self.students.insert(
            name.into(),
            Student {
                age,
                major: major.into(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Student> {
        self.students.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Student> {
        self.students.remove(name)
    }

    /// How many students are in each major.
    pub fn count_by_major(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for student in self.students.values() {
            *counts.entry(student.major.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StudentRegistry {
        let mut reg = StudentRegistry::new();
        reg.add("Alice", 21, "CS");
        reg.add("Bob", 23, "Math");
        reg.add("Carol", 22, "CS");
        reg
    }

    #[test]
    fn adds_and_looks_up() {
        let reg = registry();
        let alice = reg.get("Alice").unwrap();
        assert_eq!(alice.age, 21);
        assert_eq!(alice.major, "CS");
    }

    #[test]
    fn missing_student_is_none() {
        let reg = registry();
        assert!(reg.get("Mallory").is_none());
    }

    #[test]
    fn re_adding_overwrites() {
        let mut reg = registry();
        reg.add("Alice", 22, "Physics");
        assert_eq!(reg.get("Alice").unwrap().major, "Physics");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn removes_a_student() {
        let mut reg = registry();
        let removed = reg.remove("Bob").unwrap();
        assert_eq!(removed.major, "Math");
        assert!(reg.get("Bob").is_none());
    }

    #[test]
    fn counts_by_major() {
        let counts = registry().count_by_major();
        assert_eq!(counts.get("CS"), Some(&2));
        assert_eq!(counts.get("Math"), Some(&1));
    }
}
