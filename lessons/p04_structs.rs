//! Lesson 4: Structs and Methods
//! Object-style code without classes: impl blocks, module privacy,
//! composition, traits with provided methods, and validated setters.
//!
//! Run with: cargo run --bin p04_structs

use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }

    fn greet(&self) -> String {
        format!("Hello, my name is {} and I am {} years old.", self.name, self.age)
    }
}

// Privacy is per module, not per type
mod staff {
    #[derive(Debug)]
    pub struct Employee {
        id: u32,
        salary: u32,
        pub department: String,
    }

    impl Employee {
        pub fn new(id: u32, salary: u32, department: &str) -> Self {
            Self {
                id,
                salary,
                department: department.to_string(),
            }
        }

        pub fn details(&self) -> String {
            format!("Employee ID: {}, Department: {}", self.id, self.department)
        }

        fn calculate_bonus(&self) -> f64 {
            self.salary as f64 * 0.1
        }

        pub fn bonus(&self) -> f64 {
            self.calculate_bonus()
        }

        pub fn salary(&self) -> u32 {
            self.salary
        }
    }

    // Composition: a manager wraps an employee rather than extending it
    #[derive(Debug)]
    pub struct Manager {
        employee: Employee,
        team: Vec<String>,
    }

    impl Manager {
        pub fn new(employee: Employee, team: &[&str]) -> Self {
            Self {
                employee,
                team: team.iter().map(|s| s.to_string()).collect(),
            }
        }

        pub fn details(&self) -> String {
            format!("{}, Team size: {}", self.employee.details(), self.team.len())
        }

        pub fn salary_details(&self) -> String {
            format!("Salary: ${}", self.employee.salary())
        }
    }
}

// `area` is required, `describe` comes for free
trait Shape {
    fn color(&self) -> &str;
    fn area(&self) -> f64;

    fn describe(&self) -> String {
        format!("This shape is {}", self.color())
    }
}

struct Circle {
    color: String,
    radius: f64,
}

struct Rectangle {
    color: String,
    width: f64,
    height: f64,
}

impl Shape for Circle {
    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Shape for Rectangle {
    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

struct MathUtils;

impl MathUtils {
    const FULL_TURN_DEGREES: f64 = 360.0;

    fn add(x: i32, y: i32) -> i32 {
        x + y
    }

    fn multiply(x: i32, y: i32) -> i32 {
        x * y
    }
}

#[derive(Error, Debug, PartialEq)]
enum AccountError {
    #[error("Balance cannot be negative (attempted {attempted})")]
    NegativeBalance { attempted: i64 },
}

#[derive(Debug)]
struct BankAccount {
    owner: String,
    balance: i64,
}

impl BankAccount {
    fn new(owner: &str, initial_balance: i64) -> Self {
        Self {
            owner: owner.to_string(),
            balance: initial_balance,
        }
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> i64 {
        self.balance
    }

    fn set_balance(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount < 0 {
            return Err(AccountError::NegativeBalance { attempted: amount });
        }
        self.balance = amount;
        Ok(())
    }

    fn deposit(&mut self, amount: i64) -> Result<(), AccountError> {
        self.set_balance(self.balance + amount)
    }

    fn withdraw(&mut self, amount: i64) -> Result<(), AccountError> {
        self.set_balance(self.balance - amount)
    }
}

trait Vehicle {
    fn start(&mut self);
    fn stop(&mut self);
}

struct Car {
    make: String,
    model: String,
    running: bool,
}

impl Vehicle for Car {
    fn start(&mut self) {
        self.running = true;
        println!("{} {} started", self.make, self.model);
    }

    fn stop(&mut self) {
        self.running = false;
        println!("{} {} stopped", self.make, self.model);
    }
}

#[derive(Debug)]
struct Configuration {
    api_key: String,
    api_url: String,
}

// Defaults live in one constructor instead of parameter properties
#[derive(Debug)]
struct Product {
    id: u32,
    name: String,
    price: u32,
    stock: u32,
}

impl Product {
    fn new(id: u32, name: &str, price: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            stock: 0,
        }
    }

    fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }
}

fn main() {
    println!("=== Struct with methods ===");
    let person = Person::new("John", 30);
    println!("{:?}", person);
    println!("{}", person.greet());

    println!("\n=== Module privacy ===");
    let employee = staff::Employee::new(101, 50_000, "Engineering");
    println!("{}", employee.details());
    println!("Bonus: ${}", employee.bonus());
    println!("Department is public: {}", employee.department);
    // employee.id; // Error: field `id` of struct `Employee` is private

    println!("\n=== Composition ===");
    let manager = staff::Manager::new(
        staff::Employee::new(102, 80_000, "Product"),
        &["Alice", "Bob", "Charlie"],
    );
    println!("{}", manager.details());
    println!("{}", manager.salary_details());

    println!("\n=== Traits with provided methods ===");
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle {
            color: "blue".to_string(),
            radius: 5.0,
        }),
        Box::new(Rectangle {
            color: "green".to_string(),
            width: 4.0,
            height: 6.0,
        }),
    ];
    for shape in &shapes {
        println!("{} with area {:.2}", shape.describe(), shape.area());
    }

    println!("\n=== Associated items ===");
    println!("Full turn: {} degrees", MathUtils::FULL_TURN_DEGREES);
    println!("5 + 3 = {}", MathUtils::add(5, 3));
    println!("4 * 2 = {}", MathUtils::multiply(4, 2));

    println!("\n=== Getters and validated setters ===");
    let mut account = BankAccount::new("John", 1000);
    println!("{}'s balance: ${}", account.owner(), account.balance());
    if let Err(e) = account.deposit(500) {
        println!("deposit failed: {}", e);
    }
    println!("After deposit: ${}", account.balance());
    if let Err(e) = account.withdraw(200) {
        println!("withdraw failed: {}", e);
    }
    println!("After withdrawal: ${}", account.balance());
    match account.withdraw(5000) {
        Ok(()) => println!("Overdraft accepted?"),
        Err(e) => println!("Overdraft rejected: {}", e),
    }

    println!("\n=== Mutable trait methods ===");
    let mut car = Car {
        make: "BMW".to_string(),
        model: "M3".to_string(),
        running: false,
    };
    car.start();
    println!("Car is running: {}", car.running);
    car.stop();
    println!("Car is running: {}", car.running);

    println!("\n=== Read-only after construction ===");
    let config = Configuration {
        api_key: "abc123".to_string(),
        api_url: "https://api.example.com".to_string(),
    };
    println!("{:?}", config);
    println!("{} @ {}", config.api_key, config.api_url);

    println!("\n=== Constructors with defaults ===");
    let product = Product::new(1, "Laptop", 999).with_stock(10);
    println!("{:?}", product);
    println!("#{} {} ${} stock {}", product.id, product.name, product.price, product.stock);

    println!("\nEnd of Structs lesson");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_rejects_negative_balance() {
        let mut account = BankAccount::new("John", 100);
        assert_eq!(
            account.withdraw(150),
            Err(AccountError::NegativeBalance { attempted: -50 })
        );
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn test_account_deposit_and_withdraw() {
        let mut account = BankAccount::new("John", 1000);
        account.deposit(500).unwrap();
        account.withdraw(200).unwrap();
        assert_eq!(account.balance(), 1300);
    }

    #[test]
    fn test_shape_areas() {
        let rect = Rectangle {
            color: "green".to_string(),
            width: 4.0,
            height: 6.0,
        };
        assert_eq!(rect.area(), 24.0);
        assert_eq!(rect.describe(), "This shape is green");
    }
}
