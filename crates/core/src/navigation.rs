//! Previous/next chapter resolution.
//!
//! Orders within a novel are unique but need not be contiguous. Navigation
//! steps to the nearest existing order on either side, so a gap (orders
//! `{1, 2, 3, 5}`) never hides the chapters beyond it.

/// Orders of the chapters adjacent to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjacent {
    pub prev: Option<i32>,
    pub next: Option<i32>,
}

/// Find the nearest orders below and above `current` in `orders`.
///
/// `orders` may be unsorted; `current` itself need not be present.
///
/// ```
/// use lentera_core::navigation::adjacent_orders;
///
/// let adj = adjacent_orders(&[1, 2, 3, 5], 3);
/// assert_eq!(adj.prev, Some(2));
/// assert_eq!(adj.next, Some(5));
/// ```
pub fn adjacent_orders(orders: &[i32], current: i32) -> Adjacent {
    let prev = orders.iter().copied().filter(|&o| o < current).max();
    let next = orders.iter().copied().filter(|&o| o > current).min();
    Adjacent { prev, next }
}

/// Order suggested for a new chapter: one past the highest existing order.
pub fn next_free_order(orders: &[i32]) -> i32 {
    orders.iter().copied().max().map_or(1, |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_orders() {
        let adj = adjacent_orders(&[1, 2, 3, 4], 2);
        assert_eq!(adj, Adjacent { prev: Some(1), next: Some(3) });
    }

    #[test]
    fn gap_steps_over_missing_order() {
        let orders = [1, 2, 3, 5];
        assert_eq!(adjacent_orders(&orders, 3).next, Some(5));
        assert_eq!(adjacent_orders(&orders, 5).prev, Some(3));
    }

    #[test]
    fn first_and_last_have_one_side() {
        let orders = [5, 1, 3];
        assert_eq!(adjacent_orders(&orders, 1), Adjacent { prev: None, next: Some(3) });
        assert_eq!(adjacent_orders(&orders, 5), Adjacent { prev: Some(3), next: None });
    }

    #[test]
    fn single_chapter() {
        assert_eq!(adjacent_orders(&[1], 1), Adjacent::default());
    }

    #[test]
    fn next_free_order_follows_highest() {
        assert_eq!(next_free_order(&[]), 1);
        assert_eq!(next_free_order(&[3, 1, 7]), 8);
    }
}
