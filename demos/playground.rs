//! Builds each data structure, pokes at it a little, and prints what happened.
//!
//! Run with `cargo run --example playground`.

use datastructs::factorial::factorial;
use datastructs::list::{LinkedList, ListError};
use datastructs::queue::Queue;
use datastructs::stack::Stack;
use datastructs::tree::{Order, Tree};

fn tree() {
    let mut tree = Tree::new();
    for value in [45, 10, 7, 12, 90, 50, 2] {
        tree.insert(value);
    }

    match tree.min() {
        Some(min) => println!("minValue {}", min),
        None => println!("minValue Nil"),
    }
    match tree.search(&7) {
        Some(found) => println!("find: {}", found),
        None => println!("find: Not found"),
    }

    tree.remove(&7);
    let in_order: Vec<_> = tree.traverse(Order::InOrder).collect();
    println!("Traverse in order: {:?}", in_order);
}

fn factorials() {
    for n in [5, 3] {
        match factorial(n) {
            Some(value) => println!("{}! = {}", n, value),
            None => println!("{}! does not fit in a u64", n),
        }
    }
}

fn linked_list() -> Result<(), ListError> {
    let mut linked_list = LinkedList::new();
    linked_list.push_back(1);
    linked_list.push_back(2);
    linked_list.push_back(3);

    println!("count: {}, [2]: {}", linked_list.len(), linked_list[2]);
    linked_list[2] = 44;
    println!("Elements of list: {}", linked_list);
    linked_list.insert(0, 12)?;
    println!("{}", linked_list);

    let mut list: LinkedList<_> = linked_list.iter().copied().collect();
    println!("Elements of list: {}", list);
    list.extend([1, 1, 1, 1, 1, 1]);
    println!("Elements of list: {}", list);
    list.insert_all(4, [2, 2])?;
    println!("Elements of list: {}", list);
    list.reverse();
    println!("Elements of list: {}", list);
    list.reverse();
    println!("Elements of list: {}", list);
    list.pop_back();
    list.reverse();
    println!("Elements of list: {}", list);

    Ok(())
}

fn queue() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(5);
    queue.enqueue(6);

    println!("Count of elements in queue: {}", queue.len());
    println!("Elements of queue: {}", queue);
    match queue.peek() {
        Some(peek) => println!("Peek of queue: {}", peek),
        None => println!("Peek of queue: Empty queue"),
    }

    while let Some(element) = queue.dequeue() {
        println!("Dequeue element: {}", element);
    }
    println!("Is empty: {}", queue.is_empty());
}

fn print_stack(stack: &Stack<i32>) {
    println!("##################");
    println!("Is empty: {}", stack.is_empty());
    match stack.top() {
        Some(top) => println!("Top element: {}", top),
        None => println!("Top element: Nil"),
    }
    println!("Elements of stack: {}", stack);
}

fn stack() {
    let mut stack = Stack::new();
    print_stack(&stack);

    stack.push(1);
    stack.push(4);
    stack.push(6);
    print_stack(&stack);

    stack.pop();
    print_stack(&stack);
}

fn main() -> Result<(), ListError> {
    tree();
    factorials();
    linked_list()?;
    queue();
    stack();

    Ok(())
}
