#![allow(clippy::unwrap_used)]

use solovm::call_frame::Stack;
use solovm::constants::STACK_LIMIT;
use solovm::errors::ExceptionalHalt;
use solovm_common::U256;

#[test]
fn push_pop_is_lifo() {
    let mut stack = Stack::default();
    stack.push(U256::from(1)).unwrap();
    stack.push(U256::from(2)).unwrap();
    stack.push(U256::from(3)).unwrap();

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop1().unwrap(), U256::from(3));
    assert_eq!(stack.pop1().unwrap(), U256::from(2));
    assert_eq!(stack.pop1().unwrap(), U256::from(1));
    assert!(stack.is_empty());
}

#[test]
fn pop_many_returns_top_first() {
    let mut stack = Stack::default();
    for value in 1u64..=4 {
        stack.push(U256::from(value)).unwrap();
    }

    let [a, b] = stack.pop().unwrap();
    assert_eq!(a, U256::from(4));
    assert_eq!(b, U256::from(3));
    assert_eq!(stack.len(), 2);
}

#[test]
fn pop_on_empty_stack_underflows() {
    let mut stack = Stack::default();
    assert_eq!(stack.pop1().unwrap_err(), ExceptionalHalt::StackUnderflow);

    stack.push(U256::one()).unwrap();
    assert_eq!(
        stack.pop::<2>().unwrap_err(),
        ExceptionalHalt::StackUnderflow
    );
    // The failed pop must not consume the remaining operand.
    assert_eq!(stack.len(), 1);
}

#[test]
fn push_past_limit_overflows() {
    let mut stack = Stack::default();
    for _ in 0..STACK_LIMIT {
        stack.push(U256::one()).unwrap();
    }

    assert_eq!(stack.len(), STACK_LIMIT);
    assert_eq!(
        stack.push(U256::one()).unwrap_err(),
        ExceptionalHalt::StackOverflow
    );
}

#[test]
fn dup_copies_the_nth_operand() {
    let mut stack = Stack::default();
    stack.push(U256::from(10)).unwrap();
    stack.push(U256::from(20)).unwrap();

    stack.dup::<2>().unwrap();
    assert_eq!(stack.to_vec(), vec![
        U256::from(10),
        U256::from(20),
        U256::from(10)
    ]);

    assert_eq!(
        Stack::default().dup::<1>().unwrap_err(),
        ExceptionalHalt::StackUnderflow
    );
}

#[test]
fn swap_exchanges_with_the_nth_operand() {
    let mut stack = Stack::default();
    for value in [1u64, 2, 3, 4] {
        stack.push(U256::from(value)).unwrap();
    }

    // Top is 4; swap with the operand three positions below it.
    stack.swap::<3>().unwrap();
    assert_eq!(stack.to_vec(), vec![
        U256::from(1),
        U256::from(3),
        U256::from(2),
        U256::from(4)
    ]);

    let mut short = Stack::default();
    short.push(U256::one()).unwrap();
    assert_eq!(short.swap::<1>().unwrap_err(), ExceptionalHalt::StackUnderflow);
}

#[test]
fn get_peeks_without_removing() {
    let mut stack = Stack::default();
    stack.push(U256::from(7)).unwrap();
    stack.push(U256::from(8)).unwrap();

    assert_eq!(stack.get(0).unwrap(), U256::from(8));
    assert_eq!(stack.get(1).unwrap(), U256::from(7));
    assert_eq!(stack.get(2).unwrap_err(), ExceptionalHalt::StackUnderflow);
    assert_eq!(stack.len(), 2);
}
