//! 计数器视图模型 (View-Model)
//!
//! 持有唯一的整数值，只通过 `increment` / `reset` 修改，
//! 每次修改后通知所有观察者（渲染层据此重绘）。

use std::fmt;

/// 观察者订阅句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(i64)>;

/// 计数器
pub struct Counter {
    value: i64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            value: 0,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// 当前值，无副作用
    pub fn value(&self) -> i64 {
        self.value
    }

    /// 加一；溢出时回绕，保证操作总是成功
    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
        self.notify();
    }

    /// 归零，即使当前已经是 0 也会通知
    pub fn reset(&mut self) {
        self.value = 0;
        self.notify();
    }

    /// 注册观察者，按注册顺序在每次修改后被调用
    pub fn subscribe(&mut self, observer: impl FnMut(i64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// 移除观察者，返回是否存在
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    #[allow(dead_code)]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        let value = self.value;
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(counter: &mut Counter) -> (SubscriptionId, Rc<RefCell<Vec<i64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = counter.subscribe(move |v| sink.borrow_mut().push(v));
        (id, seen)
    }

    #[test]
    fn test_new_counter_is_zero() {
        let counter = Counter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(Counter::default().value(), 0);
    }

    #[test]
    fn test_increment() {
        let mut counter = Counter::new();
        counter.increment();
        assert_eq!(counter.value(), 1);

        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn test_increment_adds_n_from_any_start() {
        let mut counter = Counter::new();
        for _ in 0..7 {
            counter.increment();
        }
        let start = counter.value();
        for _ in 0..25 {
            counter.increment();
        }
        assert_eq!(counter.value(), start + 25);
    }

    #[test]
    fn test_reset_from_five() {
        let mut counter = Counter::new();
        for _ in 0..5 {
            counter.increment();
        }
        assert_eq!(counter.value(), 5);

        counter.reset();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut counter = Counter::new();
        counter.reset();
        assert_eq!(counter.value(), 0);

        counter.increment();
        for _ in 0..4 {
            counter.reset();
            assert_eq!(counter.value(), 0);
        }
    }

    #[test]
    fn test_reset_then_increment() {
        let mut counter = Counter::new();
        for _ in 0..9 {
            counter.increment();
        }
        counter.reset();
        for _ in 0..4 {
            counter.increment();
        }
        assert_eq!(counter.value(), 4);
    }

    #[test]
    fn test_reading_value_has_no_side_effects() {
        let mut counter = Counter::new();
        let (_, seen) = recording(&mut counter);
        counter.increment();

        for _ in 0..10 {
            assert_eq!(counter.value(), 1);
        }
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_observers_notified_in_order() {
        let mut counter = Counter::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        counter.subscribe(move |v| first.borrow_mut().push(("first", v)));
        let second = Rc::clone(&order);
        counter.subscribe(move |v| second.borrow_mut().push(("second", v)));

        counter.increment();
        counter.reset();

        assert_eq!(
            *order.borrow(),
            vec![("first", 1), ("second", 1), ("first", 0), ("second", 0)]
        );
    }

    #[test]
    fn test_reset_at_zero_still_notifies() {
        let mut counter = Counter::new();
        let (_, seen) = recording(&mut counter);

        counter.reset();
        counter.reset();

        assert_eq!(*seen.borrow(), vec![0, 0]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut counter = Counter::new();
        let (id, seen) = recording(&mut counter);
        assert_eq!(counter.observer_count(), 1);

        counter.increment();
        assert!(counter.unsubscribe(id));
        assert!(!counter.unsubscribe(id));
        assert_eq!(counter.observer_count(), 0);

        counter.increment();
        assert_eq!(counter.value(), 2);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_increment_wraps_at_max() {
        let mut counter = Counter::new();
        counter.value = i64::MAX;
        counter.increment();
        assert_eq!(counter.value(), i64::MIN);
    }
}
