//! Lesson 1: Basic Types
//! Scalars, compound types, and the places where Rust replaces null,
//! `any` and `unknown` with something the compiler can check.
//!
//! Run with: cargo run --bin p01_basic_types

use std::any::Any;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }
}

// The unit type `()` is what a function returns when it returns nothing.
fn log_message(message: &str) {
    println!("{}", message);
}

// `!` marks a function that never returns.
#[allow(dead_code)]
fn fail(message: &str) -> ! {
    panic!("{}", message);
}

fn describe(value: &dyn Any) -> String {
    if let Some(s) = value.downcast_ref::<String>() {
        format!("a String, upper-cased: {}", s.to_uppercase())
    } else if let Some(n) = value.downcast_ref::<i32>() {
        format!("an i32: {}", n)
    } else {
        "something else".to_string()
    }
}

fn main() {
    println!("=== Booleans ===");
    let is_active: bool = true;
    println!("is_active = {}", is_active);

    println!("\n=== Numbers ===");
    let integer: i32 = 10;
    let decimal: f64 = 10.1;
    let hex: u32 = 0xf00d;
    let binary: u8 = 0b1010;
    let octal: u32 = 0o744;
    println!("{} {} {} {} {}", integer, decimal, hex, binary, octal);
    println!("i32::MAX = {}, u8::MAX = {}", i32::MAX, u8::MAX);

    // Checked arithmetic instead of silent overflow
    println!("250u8.checked_add(10) = {:?}", 250u8.checked_add(10));

    println!("\n=== Strings ===");
    let first_name: &str = "John";
    let last_name: String = String::from("Smith");
    let greeting = format!("Hello, my name is {} {}", first_name, last_name);
    println!("{}", greeting);

    println!("\n=== Arrays and Vectors ===");
    let numbers: [i32; 3] = [1, 2, 3];
    let fruits: Vec<&str> = vec!["apple", "banana", "cherry"];
    println!("array: {:?}, vec: {:?}", numbers, fruits);

    println!("\n=== Tuples ===");
    let coordinates: (i32, i32) = (10, 20);
    let name_and_age: (&str, u32) = ("Alice", 30);
    println!("coordinates = {:?}, name_and_age = {:?}", coordinates, name_and_age);
    let (x, y) = coordinates;
    println!("destructured: x = {}, y = {}", x, y);

    println!("\n=== Enums ===");
    let favorite = Color::Blue;
    println!(
        "favorite = {:?} (discriminant {}, name {})",
        favorite,
        favorite as i32,
        favorite.name()
    );
    let all = [Color::Red, Color::Green, Color::Blue];
    println!("all colors: {:?}", all);

    println!("\n=== Unit ===");
    let unit: () = log_message("log_message returns ()");
    println!("unit value = {:?}", unit);

    println!("\n=== Option instead of null ===");
    let missing: Option<&str> = None;
    let present: Option<&str> = Some("value");
    println!("missing = {:?}, present = {:?}", missing, present);
    println!("missing.unwrap_or(\"default\") = {}", missing.unwrap_or("default"));

    println!("\n=== Conversions ===");
    let big: i64 = i64::from(integer);
    let truncated = 300i32 as u8;
    let parsed: Result<i32, _> = "42".parse::<i32>();
    println!("i64::from(10) = {}, 300 as u8 = {}, \"42\".parse() = {:?}", big, truncated, parsed);

    println!("\n=== Dynamic values with Any ===");
    let values: Vec<Box<dyn Any>> = vec![
        Box::new(String::from("Hello")),
        Box::new(5i32),
        Box::new(3.5f64),
    ];
    for value in &values {
        println!("{}", describe(value.as_ref()));
    }

    println!("\n=== Wide integers ===");
    let big_number: u128 = 9_007_199_254_740_991;
    println!("u128 = {}, squared = {}", big_number, big_number * big_number);

    println!("\n=== Identity vs equality ===");
    let key_a = Rc::new("key");
    let key_b = Rc::new("key");
    println!("equal values: {}", key_a == key_b);
    println!("same allocation: {}", Rc::ptr_eq(&key_a, &key_b));

    println!("\nEnd of Basic Types lesson");
}
