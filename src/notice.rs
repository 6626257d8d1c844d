use std::future::Future;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub notice: Notice,
    pub phase: BannerPhase,
}

impl Banner {
    pub fn class(&self) -> String {
        format!("notification notification--{}", self.notice.kind.as_str())
    }

    pub fn style(&self) -> String {
        let offset = match self.phase {
            BannerPhase::Shown => "0",
            BannerPhase::Entering | BannerPhase::Leaving => "100%",
        };
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 15px 20px; border-radius: 8px; \
             color: white; font-weight: 500; z-index: 10000; transition: transform 0.3s ease; \
             max-width: 300px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
             background: {}; transform: translateX({offset});",
            self.notice.kind.background()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerSlot {
    next_id: u64,
    current: Option<Banner>,
}

impl BannerSlot {
    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    // A new id makes timers of the replaced banner stale.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.current = Some(Banner {
            id: self.next_id,
            notice,
            phase: BannerPhase::Entering,
        });
        self.next_id
    }

    pub fn advance(&mut self, id: u64, phase: BannerPhase) {
        if let Some(banner) = self.current.as_mut().filter(|banner| banner.id == id) {
            banner.phase = phase;
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|banner| banner.id == id) {
            self.current = None;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTimings {
    pub enter: Duration,
    pub visible: Duration,
    pub exit: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerStep {
    Advance(BannerPhase),
    Dismiss,
}

pub async fn play_banner<S, Fut, A>(id: u64, timings: BannerTimings, sleep: S, mut apply: A)
where
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    A: FnMut(u64, BannerStep),
{
    sleep(timings.enter).await;
    apply(id, BannerStep::Advance(BannerPhase::Shown));
    sleep(timings.visible.saturating_sub(timings.enter)).await;
    apply(id, BannerStep::Advance(BannerPhase::Leaving));
    sleep(timings.exit).await;
    apply(id, BannerStep::Dismiss);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn timings() -> BannerTimings {
        BannerTimings {
            enter: Duration::from_millis(100),
            visible: Duration::from_millis(5_000),
            exit: Duration::from_millis(300),
        }
    }

    fn apply_step(slot: &mut BannerSlot, id: u64, step: BannerStep) {
        match step {
            BannerStep::Advance(phase) => slot.advance(id, phase),
            BannerStep::Dismiss => slot.dismiss(id),
        }
    }

    #[test]
    fn new_banner_replaces_existing_one() {
        let mut slot = BannerSlot::default();
        let first = slot.show(Notice::success("Message sent"));
        let second = slot.show(Notice::error("Could not send"));

        assert_ne!(first, second);
        let banner = slot.current().expect("banner is visible");
        assert_eq!(banner.id, second);
        assert_eq!(banner.notice.kind, NoticeKind::Error);
        assert_eq!(banner.phase, BannerPhase::Entering);
    }

    #[test]
    fn stale_ids_do_not_touch_successor() {
        let mut slot = BannerSlot::default();
        let first = slot.show(Notice::success("one"));
        let second = slot.show(Notice::success("two"));

        slot.advance(first, BannerPhase::Leaving);
        slot.dismiss(first);

        let banner = slot.current().expect("successor survives");
        assert_eq!(banner.id, second);
        assert_eq!(banner.phase, BannerPhase::Entering);
    }

    #[test]
    fn style_slides_with_phase() {
        let mut slot = BannerSlot::default();
        let id = slot.show(Notice::error("failed"));
        assert!(slot.current().expect("banner").style().contains("translateX(100%)"));

        slot.advance(id, BannerPhase::Shown);
        let banner = slot.current().expect("banner");
        assert!(banner.style().contains("translateX(0)"));
        assert!(banner.style().contains("#ef4444"));
        assert_eq!(banner.class(), "notification notification--error");
    }

    #[tokio::test(start_paused = true)]
    async fn banner_is_removed_after_hold_and_exit() {
        let slot = Rc::new(RefCell::new(BannerSlot::default()));
        let id = slot.borrow_mut().show(Notice::success("sent"));
        let started = tokio::time::Instant::now();

        let handle = slot.clone();
        play_banner(id, timings(), tokio::time::sleep, move |id, step| {
            apply_step(&mut handle.borrow_mut(), id, step);
        })
        .await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(5_300));
        assert!(elapsed < Duration::from_millis(5_400));
        assert!(slot.borrow().current().is_none());
    }
}
