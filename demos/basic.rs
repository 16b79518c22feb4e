use driftflake::{confirmed_id, is_temp_id, IdGenerator};

fn main() {
    // Create a generator with worker ID 1
    let mut generator = IdGenerator::new(1).unwrap();

    let id1 = generator.next_id();
    let id2 = generator.next_id();
    let id3 = generator.next_id();

    println!("Generated IDs:");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Provisional ids live in the negative space
    let temp = generator.next_temp_id();
    println!("\nTemporary ID: {temp} (temp: {})", is_temp_id(temp));
    println!("Confirmed form: {}", confirmed_id(temp));
}

fn print_id(id: i64, generator: &IdGenerator) {
    let (tick, worker, sequence) = generator.extract.decompose(id);
    let datetime = generator
        .extract
        .datetime(id)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    println!("  ID: {id}, Tick: {tick}, Date: {datetime}, Worker ID: {worker}, Sequence: {sequence}");
}
