use colored::Colorize;
use prio_heap::PriorityQueue;

fn main() {
    let mut emergency_room = PriorityQueue::new();

    // Lower number means more urgent
    emergency_room.enqueue("common cold", 5);
    emergency_room.enqueue("gunshot wound", 1);
    emergency_room.enqueue("high fever", 4);
    emergency_room.enqueue("broken arm", 2);
    emergency_room.enqueue("glass in foot", 3);

    println!("{}", "Serving patients by urgency".bold());
    while let Some(case) = emergency_room.dequeue() {
        let label = match case.priority {
            1 => case.value.red().bold(),
            2 | 3 => case.value.yellow(),
            _ => case.value.green(),
        };
        println!("  [{}] {}", case.priority, label);
    }

    match emergency_room.dequeue() {
        Some(case) => println!("unexpected case: {:?}", case),
        None => println!("{}", "Waiting room is empty".dimmed()),
    }
}
