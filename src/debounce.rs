#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn push(&mut self, event: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(event);
        Ticket(self.generation)
    }

    pub fn redeem(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }
}

// Arming drops the previous handle, which cancels its timeout.
#[derive(Debug)]
pub struct TimerSlot<H> {
    _armed: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { _armed: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn arm(&mut self, handle: H) {
        self._armed = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_yields_only_the_last_event() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.push(10.0);
        let second = debouncer.push(20.0);
        let third = debouncer.push(30.0);

        assert_eq!(debouncer.redeem(first), None);
        assert_eq!(debouncer.redeem(second), None);
        assert_eq!(debouncer.redeem(third), Some(30.0));
        assert_eq!(debouncer.redeem(third), None);
    }

    #[test]
    fn ticket_redeems_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.push("scroll");

        assert_eq!(debouncer.redeem(ticket), Some("scroll"));
        assert_eq!(debouncer.redeem(ticket), None);
    }

    #[test]
    fn quiet_period_between_bursts_fires_each() {
        let mut debouncer = Debouncer::default();
        let fired: Vec<_> = [1, 2]
            .into_iter()
            .filter_map(|event| {
                let ticket = debouncer.push(event);
                debouncer.redeem(ticket)
            })
            .collect();

        assert_eq!(fired, vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn timers_armed_per_push_fire_once_after_last_push() {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::time::Duration;

        let debouncer = Rc::new(RefCell::new(Debouncer::default()));
        let fired = Rc::new(RefCell::new(Vec::new()));
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async {
                for scroll_y in [100.0, 140.0, 180.0] {
                    let ticket = debouncer.borrow_mut().push(scroll_y);
                    let debouncer = debouncer.clone();
                    let fired = fired.clone();
                    tokio::task::spawn_local(async move {
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        if let Some(event) = debouncer.borrow_mut().redeem(ticket) {
                            fired.borrow_mut().push(event);
                        }
                    });
                    tokio::time::sleep(Duration::from_millis(3)).await;
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            })
            .await;

        assert_eq!(*fired.borrow(), vec![180.0]);
    }

    #[test]
    fn arming_releases_the_previous_timer() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Handle(Rc<Cell<usize>>);

        impl Drop for Handle {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let released = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        for _ in 0..50 {
            slot.arm(Handle(released.clone()));
        }
        assert_eq!(released.get(), 49);

        drop(slot);
        assert_eq!(released.get(), 50);
        assert_eq!(Rc::strong_count(&released), 1);
    }
}
