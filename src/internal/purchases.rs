#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::print_stdout)]

use probemap::{Linear, OpenMap, Probe, Quadratic};

const NAMES: [&str; 5] = ["Pax", "Eleven", "Angel", "Abigail", "Jack"];
const AMOUNTS: [u32; 5] = [654, 341, 70, 867, 5309];

fn show(value: Option<&u32>) -> String {
    value.map_or_else(|| "none".to_string(), ToString::to_string)
}

fn run<P: Probe>(label: &str) {
    let mut purchases: OpenMap<String, u32, P> = OpenMap::new();

    for (name, amount) in NAMES.iter().zip(AMOUNTS) {
        purchases.put((*name).to_string(), amount);
    }
    println!("Contents with {label} probing:\n{purchases}");

    let replaced = purchases.put("Eleven".to_string(), 170);
    println!("Replaced old value was {}", show(replaced.as_ref()));
    println!("Contents after changing Eleven to 170:\n{purchases}");

    println!("Calling get() on Pax, Eleven, & Angel:");
    for name in ["Pax", "Eleven", "Angel"] {
        println!("\t{name}: {}", show(purchases.get(name)));
    }

    purchases.remove("Pax");
    purchases.remove("Angel");
    println!("Contents after removing Pax & Angel:\n{purchases}");

    purchases.put("Gino".to_string(), 348);
    println!("Contents after adding Gino:\n{purchases}");

    let mut keys = purchases.keys();
    let mut values = purchases.values();
    println!("Contents of the map:");
    while let (Ok(key), Ok(value)) = (keys.try_next(), values.try_next()) {
        println!("Key-{key} : Value-{value}");
    }
    println!();
}

fn main() {
    run::<Linear>("linear");
    run::<Quadratic>("quadratic");
}
