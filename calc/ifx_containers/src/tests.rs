use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_stack_lifo_order() {
    let mut stack = Stack::new();
    stack.push('a');
    stack.push('b');
    stack.push('c');

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Ok('c'));
    assert_eq!(stack.pop(), Ok('b'));
    assert_eq!(stack.pop(), Ok('a'));
    assert!(stack.is_empty());
}

#[test]
fn test_stack_peek_does_not_remove() {
    let mut stack = Stack::new();
    stack.push(7);

    assert_eq!(stack.peek(), Ok(&7));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Ok(7));
}

#[test]
fn test_stack_empty_errors() {
    let mut stack: Stack<i64> = Stack::new();

    assert_eq!(
        stack.pop(),
        Err(EmptyContainerError {
            kind: ContainerKind::Stack
        })
    );
    assert_eq!(
        stack.peek(),
        Err(EmptyContainerError {
            kind: ContainerKind::Stack
        })
    );
}

#[test]
fn test_queue_fifo_order() {
    let mut queue = Queue::new();
    queue.enqueue('a');
    queue.enqueue('b');
    queue.enqueue('c');

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Ok('a'));
    assert_eq!(queue.dequeue(), Ok('b'));
    assert_eq!(queue.dequeue(), Ok('c'));
    assert!(queue.is_empty());
}

#[test]
fn test_queue_peek_sees_head() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);

    assert_eq!(queue.peek(), Ok(&1));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_queue_empty_errors() {
    let mut queue: Queue<char> = Queue::new();

    assert_eq!(
        queue.dequeue(),
        Err(EmptyContainerError {
            kind: ContainerKind::Queue
        })
    );
    assert_eq!(
        queue.peek(),
        Err(EmptyContainerError {
            kind: ContainerKind::Queue
        })
    );
}

#[test]
fn test_empty_error_messages() {
    let stack_err = EmptyContainerError {
        kind: ContainerKind::Stack,
    };
    let queue_err = EmptyContainerError {
        kind: ContainerKind::Queue,
    };

    assert_eq!(stack_err.to_string(), "stack is empty");
    assert_eq!(queue_err.to_string(), "queue is empty");
}

#[test]
fn test_interleaved_operations() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(3);
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert!(queue.dequeue().is_err());
}
