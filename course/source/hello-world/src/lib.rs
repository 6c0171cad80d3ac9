//! Hello, world - your first Rust function with TDD

/// Greet a person by name.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Greet the whole world.
pub fn greet_world() -> String {
    greet("world")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_a_person() {
        assert_eq!(greet("Chris"), "Hello, Chris!");
    }

    #[test]
    fn greets_the_world() {
        assert_eq!(greet_world(), "Hello, world!");
    }
}
