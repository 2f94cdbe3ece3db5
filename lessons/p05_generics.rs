//! Lesson 5: Generics
//! Generic functions and structs, trait bounds, default type parameters,
//! and how the usual "utility types" look when spelled out in Rust.
//!
//! Run with: cargo run --bin p05_generics

use serde::Serialize;
use serde_json::Value;
use std::any::type_name;
use std::collections::BTreeMap;
use std::fmt::Debug;

fn identity<T>(arg: T) -> T {
    arg
}

#[derive(Debug, Serialize)]
struct Response<T> {
    data: T,
    status: u16,
    message: String,
}

impl<T> Response<T> {
    fn ok(data: T) -> Self {
        Self {
            data,
            status: 200,
            message: "OK".to_string(),
        }
    }
}

#[derive(Debug)]
struct GenericBox<T> {
    value: T,
}

impl<T: Clone> GenericBox<T> {
    fn new(value: T) -> Self {
        Self { value }
    }

    fn get(&self) -> T {
        self.value.clone()
    }

    fn set(&mut self, value: T) {
        self.value = value;
    }
}

trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for &str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

struct Custom {
    length: usize,
    #[allow(dead_code)]
    value: &'static str,
}

impl HasLength for Custom {
    fn length(&self) -> usize {
        self.length
    }
}

fn log_length<T: HasLength>(arg: T) -> T {
    println!("Length: {}", arg.length());
    arg
}

fn pair<T, U>(first: T, second: U) -> (T, U) {
    (first, second)
}

#[derive(Debug)]
struct Container<T> {
    value: T,
}

// Default type parameter: untyped payloads fall back to JSON
#[derive(Debug, Serialize)]
struct ApiResponse<T = Value> {
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Default)]
struct Example {
    name: String,
    description: String,
}

fn create<T: Default>() -> T {
    T::default()
}

fn type_name_of<T>(_: &T) -> &'static str {
    type_name::<T>()
}

#[derive(Debug, Clone, Serialize)]
struct Todo {
    title: String,
    description: String,
    completed: bool,
}

// Each field optional, like a partial update
#[derive(Debug, Default, Serialize)]
struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

impl Todo {
    fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

// Pick: only the title. Omit: everything but `completed`.
#[derive(Debug, Serialize)]
struct TodoTitle<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct TodoPreview<'a> {
    title: &'a str,
    description: &'a str,
}

fn show<T: Debug>(label: &str, value: T) {
    println!("{}: {:?}", label, value);
}

fn main() {
    println!("=== Generic function ===");
    show("identity::<&str>", identity::<&str>("Hello Generic World"));
    show("identity::<i32>", identity::<i32>(42));
    show("identity (inferred)", identity(true));

    println!("\n=== Generic struct ===");
    let text = Response::ok("Success");
    let number = Response::ok(42);
    println!("{:?}", text);
    println!("{:?}", number);
    println!("status {} {}, data {}", text.status, text.message, number.data);

    println!("\n=== Generic box ===");
    let mut string_box = GenericBox::new("Rust".to_string());
    let number_box = GenericBox::new(100);
    println!("{} / {}", string_box.get(), number_box.get());
    string_box.set("Ferris".to_string());
    println!("After set: {}", string_box.get());

    println!("\n=== Trait bounds ===");
    log_length("Hello");
    log_length(vec![1, 2, 3]);
    log_length(Custom {
        length: 10,
        value: "Custom",
    });
    // log_length(123); // Error: the trait `HasLength` is not implemented for `{integer}`

    println!("\n=== Multiple type parameters ===");
    show("pair", pair("key", 42));

    println!("\n=== Generic aliases ===");
    let number_container: Container<i32> = Container { value: 42 };
    let string_container: Container<&str> = Container { value: "Hello" };
    println!("{:?} {:?}", number_container, string_container);
    println!("values: {} {}", number_container.value, string_container.value);

    println!("\n=== Default type parameters ===");
    let default_response: ApiResponse = ApiResponse {
        data: Value::String("Default type".to_string()),
        error: None,
    };
    let typed_response: ApiResponse<Vec<i32>> = ApiResponse {
        data: vec![1, 2, 3],
        error: None,
    };
    for json in [
        serde_json::to_string(&default_response),
        serde_json::to_string(&typed_response),
    ] {
        match json {
            Ok(json) => println!("{}", json),
            Err(e) => println!("serialization failed: {}", e),
        }
    }

    println!("\n=== Default-based factory ===");
    let example: Example = create();
    println!("{:?} (name {:?}, description {:?})", example, example.name, example.description);
    let example = Example {
        name: "Example".to_string(),
        description: "Built by hand after create::<Example>()".to_string(),
    };
    println!("{:?}", example);

    println!("\n=== Type names ===");
    println!("{}", type_name_of(&"text"));
    println!("{}", type_name_of(&1.5f64));
    println!("{}", type_name_of(&true));
    println!("{}", type_name_of(&identity::<u8>));

    println!("\n=== Utility type analogs ===");
    let mut todo = Todo {
        title: "Learn Rust".to_string(),
        description: "Learn Rust generics".to_string(),
        completed: false,
    };
    let patch = TodoPatch {
        completed: Some(true),
        ..Default::default()
    };
    println!("patch: {}", serde_json::to_string(&patch).unwrap_or_default());
    todo.apply(patch);
    println!("patched: {:?}", todo);

    let title_only = TodoTitle { title: &todo.title };
    let preview = TodoPreview {
        title: &todo.title,
        description: &todo.description,
    };
    println!("pick: {}", serde_json::to_string(&title_only).unwrap_or_default());
    println!("omit: {}", serde_json::to_string(&preview).unwrap_or_default());

    let mut todo_map: BTreeMap<&str, Todo> = BTreeMap::new();
    todo_map.insert("task1", todo.clone());
    todo_map.insert(
        "task2",
        Todo {
            title: "Learn traits".to_string(),
            description: "Learn Rust trait objects".to_string(),
            completed: false,
        },
    );
    for (key, value) in &todo_map {
        println!("{} => {} (done: {})", key, value.title, value.completed);
    }

    println!("\nEnd of Generics lesson");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_touches_set_fields() {
        let mut todo = Todo {
            title: "a".to_string(),
            description: "b".to_string(),
            completed: false,
        };
        todo.apply(TodoPatch {
            title: Some("c".to_string()),
            ..Default::default()
        });
        assert_eq!(todo.title, "c");
        assert_eq!(todo.description, "b");
        assert!(!todo.completed);
    }

    #[test]
    fn test_default_type_parameter_serializes() {
        let response: ApiResponse = ApiResponse {
            data: Value::from(1),
            error: None,
        };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"data":1}"#);
    }
}
