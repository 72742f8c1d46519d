use fishshop_types::domain::barcode::{sample_barcodes, Barcode};
use fishshop_types::domain::feedback::Feedback;
use fishshop_types::domain::order::{Order, OrderPatch};

/// The three shop collections, each kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Collections {
    pub orders: Vec<Order>,
    pub feedback: Vec<Feedback>,
    pub barcodes: Vec<Barcode>,
}

impl Collections {
    /// Fills an empty barcode collection with the sample catalogue. Returns
    /// whether anything was inserted.
    pub fn seed_barcodes(&mut self) -> bool {
        if !self.barcodes.is_empty() {
            return false;
        }
        self.barcodes = seeded_barcodes();
        true
    }
}

pub fn seeded_barcodes() -> Vec<Barcode> {
    sample_barcodes()
        .into_iter()
        .map(|b| b.into_barcode())
        .collect()
}

/// Applies `patch` to the order with `id` inside `orders`, returning the
/// updated record.
pub fn patch_order(orders: &mut [Order], id: &str, patch: OrderPatch) -> Option<Order> {
    let order = orders.iter_mut().find(|o| o.id == id)?;
    order.apply(patch);
    Some(order.clone())
}

/// Removes every element matching `pred`; true when the length changed.
pub fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !pred(item));
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_only_when_empty() {
        let mut c = Collections::default();
        assert!(c.seed_barcodes());
        assert_eq!(c.barcodes.len(), 3);
        assert!(!c.seed_barcodes());
        assert_eq!(c.barcodes.len(), 3);
    }

    #[test]
    fn remove_where_reports_change() {
        let mut v = vec![1, 2, 3];
        assert!(remove_where(&mut v, |x| *x == 2));
        assert!(!remove_where(&mut v, |x| *x == 9));
        assert_eq!(v, vec![1, 3]);
    }
}
