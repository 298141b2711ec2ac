//! Bar chart model for a prediction and the slot owning the live chart.

use tracing::trace;

use crate::PredictionResult;

pub const CHART_TITLE: &str = "Predicted Price Distribution";
pub const SERIES_LABEL: &str = "Price (Rs/qtl)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    Min,
    Modal,
    Max,
}

impl PriceKind {
    pub fn label(&self) -> &'static str {
        match self {
            PriceKind::Min => "Min Price",
            PriceKind::Modal => "Modal Price",
            PriceKind::Max => "Max Price",
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            PriceKind::Min => "rgba(255, 152, 0, 0.7)",
            PriceKind::Modal => "rgba(3, 169, 244, 0.7)",
            PriceKind::Max => "rgba(139, 195, 74, 0.7)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBar {
    pub kind: PriceKind,
    pub value: f64,
}

/// Bars in display order: min, modal, max.
pub fn price_bars(result: &PredictionResult) -> [PriceBar; 3] {
    [
        PriceBar {
            kind: PriceKind::Min,
            value: result.min_price,
        },
        PriceBar {
            kind: PriceKind::Modal,
            value: result.modal_price,
        },
        PriceBar {
            kind: PriceKind::Max,
            value: result.max_price,
        },
    ]
}

/// A rendered chart that has to be torn down explicitly.
pub trait ChartHandle {
    fn destroy(self);
}

/// Holds at most one live chart.
#[derive(Debug)]
pub struct ChartSlot<H: ChartHandle> {
    current: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    /// Destroys the current chart, then stores the one built by `create`.
    pub fn replace(&mut self, create: impl FnOnce() -> H) {
        self.clear();
        trace!("creating chart");
        self.current = Some(create());
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            trace!("destroying previous chart");
            previous.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorded {
        id: usize,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ChartHandle for Recorded {
        fn destroy(self) {
            self.log.borrow_mut().push(format!("destroy {}", self.id));
        }
    }

    fn create(id: usize, log: &Rc<RefCell<Vec<String>>>) -> impl FnOnce() -> Recorded {
        let log = log.clone();
        move || {
            log.borrow_mut().push(format!("create {id}"));
            Recorded { id, log }
        }
    }

    #[test]
    fn bars_are_min_modal_max() {
        let bars = price_bars(&PredictionResult {
            min_price: 1000.0,
            max_price: 2000.0,
            modal_price: 1500.0,
        });
        let kinds: Vec<_> = bars.iter().map(|b| b.kind).collect();
        let values: Vec<_> = bars.iter().map(|b| b.value).collect();
        assert_eq!(kinds, vec![PriceKind::Min, PriceKind::Modal, PriceKind::Max]);
        assert_eq!(values, vec![1000.0, 1500.0, 2000.0]);
    }

    #[test]
    fn replace_destroys_previous_before_creating() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();
        slot.replace(create(1, &log));
        slot.replace(create(2, &log));
        slot.replace(create(3, &log));
        assert_eq!(
            *log.borrow(),
            vec!["create 1", "destroy 1", "create 2", "destroy 2", "create 3"]
        );
        assert_eq!(slot.current().map(|c| c.id), Some(3));
    }

    #[test]
    fn clear_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();
        slot.replace(create(1, &log));
        slot.clear();
        slot.clear();
        assert!(slot.is_empty());
        assert_eq!(*log.borrow(), vec!["create 1", "destroy 1"]);
    }
}
