//! Lesson 6: Advanced Types
//! Enums as unions and discriminated unions, Option handling, type-level
//! flags through associated consts, recursive data, and literal enums.
//!
//! Run with: cargo run --bin p06_advanced_types

use rand::Rng;
use serde_json::{json, Value};
use std::f64::consts::PI;
use std::fmt;

enum StringOrNumber {
    Text(String),
    Number(f64),
}

fn format_value(value: &StringOrNumber) -> String {
    match value {
        StringOrNumber::Text(s) => s.to_uppercase(),
        StringOrNumber::Number(n) => format!("{:.2}", n),
    }
}

#[derive(Debug, Clone)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Debug, Clone)]
struct EmployeeInfo {
    employee_id: String,
    department: String,
}

// Both at once: compose the two records
#[derive(Debug)]
struct Worker {
    person: Person,
    info: EmployeeInfo,
}

enum Record {
    Person(Person),
    Employee(EmployeeInfo),
}

fn process_value(value: &Record) {
    match value {
        Record::Person(p) => println!("Person: {}, {}", p.name, p.age),
        Record::Employee(e) => println!("Employee: {}, {}", e.employee_id, e.department),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Square { side } => side * side,
            Shape::Rectangle { width, height } => width * height,
        }
    }
}

fn print_length(text: Option<&str>) {
    match text {
        Some(t) => println!("Text length: {}", t.len()),
        None => println!("Text is missing"),
    }
}

// Index access by key over a JSON object
fn pluck<'a>(obj: &'a Value, keys: &[&str]) -> Vec<&'a Value> {
    keys.iter().filter_map(|key| obj.get(*key)).collect()
}

#[derive(Debug, Default)]
struct NullablePerson {
    name: Option<String>,
    age: Option<u32>,
}

// A compile-time answer to "is this a string type?"
trait IsString {
    const IS_STRING: bool;
}

impl IsString for String {
    const IS_STRING: bool = true;
}

impl IsString for &str {
    const IS_STRING: bool = true;
}

impl IsString for i32 {
    const IS_STRING: bool = false;
}

fn is_string<T: IsString>() -> bool {
    T::IS_STRING
}

#[derive(Debug, Clone, Copy)]
enum Vertical {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy)]
enum Horizontal {
    Left,
    Center,
    Right,
}

// Every combination is representable; nothing else is.
#[derive(Debug, Clone, Copy)]
struct Position(Vertical, Horizontal);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.0 {
            Vertical::Top => "top",
            Vertical::Middle => "middle",
            Vertical::Bottom => "bottom",
        };
        let h = match self.1 {
            Horizontal::Left => "left",
            Horizontal::Center => "center",
            Horizontal::Right => "right",
        };
        write!(f, "{}-{}", v, h)
    }
}

#[derive(Debug, Clone, Copy)]
enum UserField {
    Name,
    Email,
    Password,
}

impl UserField {
    fn changed_event(self) -> String {
        let field = match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Password => "password",
        };
        format!("{}Changed", field)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    North,
    East,
    South,
    West,
}

fn move_by(direction: Direction, distance: u32) {
    println!("Moving {} units {:?}", distance, direction);
}

/// A roll always lands in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DiceRoll(u8);

impl DiceRoll {
    fn roll(rng: &mut impl Rng) -> Self {
        DiceRoll(rng.gen_range(1..=6))
    }
}

fn main() {
    println!("=== Union enums ===");
    println!("{}", format_value(&StringOrNumber::Text("hello".to_string())));
    println!("{}", format_value(&StringOrNumber::Number(42.1234)));

    println!("\n=== Composition ===");
    let worker = Worker {
        person: Person {
            name: "John Smith".to_string(),
            age: 30,
        },
        info: EmployeeInfo {
            employee_id: "E123".to_string(),
            department: "Engineering".to_string(),
        },
    };
    println!("{:?}", worker);

    println!("\n=== Matching on variants ===");
    process_value(&Record::Person(Person {
        name: "Jane".to_string(),
        age: 25,
    }));
    process_value(&Record::Employee(EmployeeInfo {
        employee_id: "E456".to_string(),
        department: "Marketing".to_string(),
    }));
    process_value(&Record::Person(worker.person.clone()));
    process_value(&Record::Employee(worker.info.clone()));

    println!("\n=== Discriminated unions ===");
    let shapes = [
        Shape::Circle { radius: 5.0 },
        Shape::Square { side: 4.0 },
        Shape::Rectangle {
            width: 3.0,
            height: 6.0,
        },
    ];
    for shape in &shapes {
        println!("{:?} area: {:.2}", shape, shape.area());
    }

    println!("\n=== Optional values ===");
    print_length(Some("Hello"));
    print_length(None);

    println!("\n=== Index access ===");
    let person = json!({
        "name": "John",
        "age": 30,
        "email": "john@example.com",
        "phone": "123-456-7890"
    });
    println!("{:?}", pluck(&person, &["name", "email"]));

    println!("\n=== Nullable fields ===");
    let nullable = NullablePerson {
        name: Some("John".to_string()),
        age: None,
    };
    println!("{:?}", nullable);
    println!(
        "name: {}, age: {}",
        nullable.name.as_deref().unwrap_or("<none>"),
        nullable.age.map_or("<none>".to_string(), |a| a.to_string())
    );

    println!("\n=== Type-level flags ===");
    println!(
        "String: {}, &str: {}, i32: {}",
        is_string::<String>(),
        is_string::<&str>(),
        is_string::<i32>()
    );

    println!("\n=== Constrained string combinations ===");
    let top_left = Position(Vertical::Top, Horizontal::Left);
    let bottom_right = Position(Vertical::Bottom, Horizontal::Right);
    let middle_center = Position(Vertical::Middle, Horizontal::Center);
    println!("{} {} {}", top_left, bottom_right, middle_center);
    for field in [UserField::Name, UserField::Email, UserField::Password] {
        println!("{}", field.changed_event());
    }

    println!("\n=== Recursive data ===");
    let product = json!({
        "name": "Product",
        "price": 42.99,
        "in_stock": true,
        "tags": ["electronics", "gadget"],
        "details": {
            "manufacturer": "Tech Corp",
            "model": "XYZ",
            "specifications": null
        }
    });
    match serde_json::to_string_pretty(&product) {
        Ok(pretty) => println!("{}", pretty),
        Err(e) => println!("could not render JSON: {}", e),
    }

    println!("\n=== Literal enums ===");
    move_by(Direction::North, 10);
    println!("Other headings: {:?}", [Direction::East, Direction::South, Direction::West]);
    let roll = DiceRoll::roll(&mut rand::thread_rng());
    println!("Dice roll: {}", roll.0);

    println!("\nEnd of Advanced Types lesson");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_areas() {
        assert!((Shape::Circle { radius: 5.0 }.area() - 78.54).abs() < 0.01);
        assert_eq!(Shape::Square { side: 4.0 }.area(), 16.0);
        assert_eq!(
            Shape::Rectangle {
                width: 3.0,
                height: 6.0
            }
            .area(),
            18.0
        );
    }

    #[test]
    fn test_dice_roll_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let DiceRoll(face) = DiceRoll::roll(&mut rng);
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_pluck_skips_missing_keys() {
        let obj = json!({"name": "John", "age": 30});
        assert_eq!(pluck(&obj, &["name", "height"]), vec![&json!("John")]);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position(Vertical::Top, Horizontal::Left).to_string(), "top-left");
        assert_eq!(UserField::Email.changed_event(), "emailChanged");
    }

    #[test]
    fn test_type_level_flags() {
        assert!(is_string::<String>());
        assert!(!is_string::<i32>());
    }
}
