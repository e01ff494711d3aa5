use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

pub fn square(x: i32) -> i32 {
    x * x
}

pub fn is_odd(x: &i32) -> bool {
    x % 2 != 0
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Counts how many times wrapped functions were invoked, to observe laziness
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn track<F, In, Out>(&self, inner_fn: F) -> impl Fn(In) -> Out + Clone
    where
        F: Fn(In) -> Out + Clone,
    {
        let this = self.clone();

        move |input| {
            this.record();
            inner_fn(input)
        }
    }
}
