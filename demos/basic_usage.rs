use dictuple::tour::{dictionary_tour, tuple_tour};
use dictuple::{tuple, Config, FixedTuple, Key, OrderedMap, OrderedMapConfig, Result, Value};

fn main() -> Result<()> {
    dictuple::init();

    // Pass `tour` to print the full annotated walkthroughs instead
    if std::env::args().any(|arg| arg == "tour") {
        let mut text = String::new();
        dictionary_tour(&mut text)?;
        tuple_tour(&mut text)?;
        print!("{}", text);
        return Ok(());
    }

    println!("=== Dictuple Rust Demo ===\n");

    println!("1. OrderedMap:");
    let mut inventory = OrderedMap::with_config(OrderedMapConfig::from_env()?);
    inventory.insert(Key::from("apples"), Value::from(12));
    inventory.insert(Key::from("pears"), Value::from(3));
    inventory.insert(Key::from("plums"), Value::from(0));
    println!("   {}", inventory);

    inventory.insert(Key::from("apples"), Value::from(10));
    println!("   After restocking apples (position kept): {}", inventory);

    let removed = inventory.remove(&Key::from("pears"))?;
    println!("   Removed pears ({}): {}", removed, inventory);

    match inventory.try_get(&Key::from("kiwis")) {
        Ok(count) => println!("   kiwis: {}", count),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n2. FixedTuple:");
    let numbers = FixedTuple::pack([1, 2, 3, 4, 5]);
    println!("   numbers = {}", numbers);
    println!("   numbers[-1] = {}", numbers.get(-1)?);
    println!("   numbers[::-1] = {}", numbers.slice(None, None, Some(-1))?);
    println!("   numbers[1:4] = {}", numbers.slice(Some(1), Some(4), None)?);
    if let Err(e) = numbers.set(0, 10) {
        println!("   numbers[0] = 10 -> Error: {}", e);
    }

    let ([first, second], rest) = numbers.unpack::<2>()?;
    println!("   first={}, second={}, rest={:?}", first, second, rest);

    println!("\n3. Mixed values:");
    let record = tuple!("Ali", 20, 3.75, true);
    println!("   record = {}", record);

    let mut grid: OrderedMap<FixedTuple<i64>, Value> = OrderedMap::new();
    grid.insert(FixedTuple::pack([0, 0]), Value::from("origin"));
    grid.insert(FixedTuple::pack([2, 3]), Value::from(record));
    println!("   grid = {}", grid);

    Ok(())
}
