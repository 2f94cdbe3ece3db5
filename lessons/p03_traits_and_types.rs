//! Lesson 3: Traits and Type Aliases
//! Structs as data contracts, traits as behaviour contracts, and enums
//! where other languages reach for string unions.
//!
//! Run with: cargo run --bin p03_traits_and_types

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
struct Person {
    first_name: String,
    last_name: String,
    age: u32,
}

// Optional fields
#[derive(Debug)]
struct Product {
    id: u32,
    name: String,
    price: u32,
    description: Option<String>,
}

// Fields are immutable unless the binding is `mut`
#[derive(Debug, Clone, Copy)]
struct Point {
    x: i32,
    y: i32,
}

trait Animal {
    fn name(&self) -> &str;
}

// Supertrait: every Dog is an Animal
trait Dog: Animal {
    fn breed(&self) -> &str;
    fn bark(&self) {
        println!("{} says Woof!", self.name());
    }
}

struct Shepherd {
    name: String,
}

impl Animal for Shepherd {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Dog for Shepherd {
    fn breed(&self) -> &str {
        "German Shepherd"
    }
}

trait Vehicle {
    fn start(&self);
}

#[derive(Debug)]
struct Car {
    make: String,
    model: String,
    year: u16,
}

impl Vehicle for Car {
    fn start(&self) {
        println!("Starting {} {} ({})...", self.make, self.model, self.year);
    }
}

type MathFn = fn(i32, i32) -> i32;

// Type alias over an enum: an ID is either numeric or textual
#[derive(Debug)]
enum Id {
    Number(u32),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => write!(f, "{}", s),
        }
    }
}

type RecordId = Id;

fn print_id(id: &RecordId) {
    println!("ID: {}", id);
}

// Composition instead of intersection types
#[derive(Debug)]
struct Employee {
    id: u32,
    name: String,
}

#[derive(Debug)]
struct Manager {
    employee: Employee,
    department: String,
    level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Active,
    Inactive,
    Pending,
}

fn set_status(status: Status) {
    println!("Status set to: {:?}", status);
}

// The compiler checks every variant is handled
enum Pet {
    Dog(Shepherd),
    Cat { name: String },
}

fn make_sound(pet: &Pet) {
    match pet {
        Pet::Dog(dog) => dog.bark(),
        Pet::Cat { name } => println!("{} says Meow!", name),
    }
}

#[derive(Debug, Default)]
struct PartialPerson {
    name: Option<String>,
    age: Option<u32>,
    email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CssUnit {
    Px,
    Em,
    Rem,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CssValue {
    amount: f64,
    unit: CssUnit,
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            CssUnit::Px => "px",
            CssUnit::Em => "em",
            CssUnit::Rem => "rem",
            CssUnit::Percent => "%",
        };
        write!(f, "{}{}", self.amount, unit)
    }
}

impl FromStr for CssValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(r"^(\d+(?:\.\d+)?)(px|em|rem|%)$").map_err(|e| e.to_string())?;
        let caps = re
            .captures(s)
            .ok_or_else(|| format!("'{}' is not a CSS value", s))?;
        let amount: f64 = caps[1].parse().map_err(|_| format!("bad amount in '{}'", s))?;
        let unit = match &caps[2] {
            "px" => CssUnit::Px,
            "em" => CssUnit::Em,
            "rem" => CssUnit::Rem,
            _ => CssUnit::Percent,
        };
        Ok(CssValue { amount, unit })
    }
}

fn main() {
    println!("=== Structs ===");
    let person = Person {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        age: 30,
    };
    println!("{:?}", person);
    println!("{} {} is {}", person.first_name, person.last_name, person.age);

    println!("\n=== Optional fields ===");
    let laptop = Product {
        id: 1,
        name: "Laptop".to_string(),
        price: 999,
        description: None,
    };
    let phone = Product {
        id: 2,
        name: "Phone".to_string(),
        price: 699,
        description: Some("Latest model".to_string()),
    };
    for product in [&laptop, &phone] {
        println!(
            "#{} {} ${} - {}",
            product.id,
            product.name,
            product.price,
            product.description.as_deref().unwrap_or("no description")
        );
    }

    println!("\n=== Immutability ===");
    let point = Point { x: 10, y: 20 };
    // point.x = 5; // Error: cannot assign to `point.x`, as `point` is not declared as mutable
    println!("{:?} ({}, {})", point, point.x, point.y);

    println!("\n=== Supertraits ===");
    let buddy = Shepherd {
        name: "Buddy".to_string(),
    };
    println!("{} is a {}", buddy.name(), buddy.breed());
    buddy.bark();

    println!("\n=== Implementing a trait ===");
    let car = Car {
        make: "BMW".to_string(),
        model: "M3".to_string(),
        year: 2004,
    };
    println!("{:?}", car);
    car.start();

    println!("\n=== Function type aliases ===");
    let add: MathFn = |x, y| x + y;
    let subtract: MathFn = |x, y| x - y;
    println!("add(10, 5) = {}, subtract(10, 5) = {}", add(10, 5), subtract(10, 5));

    println!("\n=== HashMap as an index signature ===");
    let mut dict: HashMap<&str, String> = HashMap::new();
    dict.insert("name", "John".to_string());
    dict.insert("age", 30.to_string());
    dict.insert("is_active", true.to_string());
    let mut keys: Vec<_> = dict.keys().collect();
    keys.sort();
    for key in keys {
        println!("{} = {}", key, dict[key]);
    }

    println!("\n=== Type aliases ===");
    print_id(&Id::Number(101));
    print_id(&Id::Text("A-202".to_string()));

    println!("\n=== Composition ===");
    let manager = Manager {
        employee: Employee {
            id: 1,
            name: "John".to_string(),
        },
        department: "Engineering".to_string(),
        level: 2,
    };
    println!("{:?}", manager);
    println!(
        "{} (#{}) leads {} at level {}",
        manager.employee.name, manager.employee.id, manager.department, manager.level
    );

    println!("\n=== Enums as literal unions ===");
    set_status(Status::Active);
    println!("other states: {:?}, {:?}", Status::Inactive, Status::Pending);
    // set_status("disabled"); // Error: expected `Status`, found `&str`

    println!("\n=== Matching as a type guard ===");
    make_sound(&Pet::Dog(buddy));
    make_sound(&Pet::Cat {
        name: "Whiskers".to_string(),
    });

    println!("\n=== Partial structs ===");
    let partial = PartialPerson {
        name: Some("Alice".to_string()),
        ..Default::default()
    };
    println!("{:?}", partial);
    println!(
        "name: {:?}, age set: {}, email set: {}",
        partial.name,
        partial.age.is_some(),
        partial.email.is_some()
    );

    println!("\n=== Validated string types ===");
    for input in ["16px", "2rem", "50%", "wide"] {
        match input.parse::<CssValue>() {
            Ok(value) => println!("{} -> {:?} (displays as {})", input, value, value),
            Err(e) => println!("{} -> error: {}", input, e),
        }
    }

    println!("\nEnd of Traits and Types lesson");
}
