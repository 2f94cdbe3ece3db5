//! Lesson 2: Functions
//! Typed parameters, optional and default arguments, closures, generic
//! functions, and a small async function awaiting a timer.
//!
//! Run with: cargo run --bin p02_functions

use std::time::Duration;

fn add(x: i32, y: i32) -> i32 {
    x + y
}

// Optional parameter via Option
fn build_name(first: &str, last: Option<&str>) -> String {
    match last {
        Some(last) => format!("{} {}", first, last),
        None => first.to_string(),
    }
}

// Default parameter via Option + unwrap_or
fn greet(name: &str, greeting: Option<&str>) -> String {
    format!("{}, {}!", greeting.unwrap_or("Hello"), name)
}

// "Rest" parameters as a slice
fn sum_all(numbers: &[i32]) -> i32 {
    numbers.iter().sum()
}

struct Point {
    x: i32,
    y: i32,
}

fn print_coordinates(point: &Point) {
    println!("Coordinates: ({}, {})", point.x, point.y);
}

// Overloading through a trait: one name, behaviour picked by argument type
trait ParseInput {
    fn parse_input(self) -> String;
}

impl ParseInput for &str {
    fn parse_input(self) -> String {
        format!("text({})", self)
    }
}

impl ParseInput for i32 {
    fn parse_input(self) -> String {
        format!("number({})", self)
    }
}

impl ParseInput for bool {
    fn parse_input(self) -> String {
        format!("flag({})", self)
    }
}

fn identity<T>(arg: T) -> T {
    arg
}

struct User {
    id: u32,
    name: String,
}

impl User {
    fn greet(&self) -> String {
        format!("Hello, my name is {} (id {})", self.name, self.id)
    }
}

type SearchFn = Box<dyn Fn(&str, &str) -> bool>;

async fn fetch_data(url: &str) -> String {
    tokio::time::sleep(Duration::from_millis(100)).await;
    format!("Data from {}", url)
}

#[tokio::main]
async fn main() {
    println!("=== Basic function ===");
    println!("add(5, 3) = {}", add(5, 3));

    println!("\n=== Optional and default parameters ===");
    println!("{} | {}", build_name("John", None), build_name("John", Some("Smith")));
    println!("{} | {}", greet("John", None), greet("Bob", Some("Hi")));

    println!("\n=== Slices as rest parameters ===");
    println!("sum_all(&[1, 2, 3, 4, 5]) = {}", sum_all(&[1, 2, 3, 4, 5]));

    println!("\n=== Function pointers ===");
    let combine: fn(&str, &str) -> String = |a, b| format!("{}{}", a, b);
    println!("{}", combine("Hello, ", "World!"));

    println!("\n=== Struct parameters ===");
    print_coordinates(&Point { x: 10, y: 20 });

    println!("\n=== Closures ===");
    let factor = 5;
    let multiply = |a: i32| a * factor;
    println!("multiply(4) = {}", multiply(4));

    println!("\n=== Trait-based overloading ===");
    println!("{} {} {}", "hello".parse_input(), 42i32.parse_input(), true.parse_input());

    println!("\n=== Generic function ===");
    println!("{} {}", identity::<&str>("Rust"), identity(100));

    println!("\n=== Methods ===");
    let user = User {
        id: 1,
        name: "John".to_string(),
    };
    println!("{}", user.greet());

    println!("\n=== Callable trait objects ===");
    let search: SearchFn = Box::new(|source: &str, needle: &str| source.contains(needle));
    println!("search = {}", search("Rust is great", "great"));

    println!("\n=== Async function ===");
    let result = fetch_data("https://example.com/api").await;
    println!("Async function result: {}", result);

    println!("\nEnd of Functions lesson");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_and_default_parameters() {
        assert_eq!(build_name("John", None), "John");
        assert_eq!(build_name("John", Some("Smith")), "John Smith");
        assert_eq!(greet("Bob", Some("Hi")), "Hi, Bob!");
        assert_eq!(greet("John", None), "Hello, John!");
    }

    #[test]
    fn test_sum_all_empty() {
        assert_eq!(sum_all(&[]), 0);
    }

    #[tokio::test]
    async fn test_fetch_data() {
        assert_eq!(fetch_data("x").await, "Data from x");
    }
}
