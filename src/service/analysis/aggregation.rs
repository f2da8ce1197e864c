//! Priority aggregation for the risk summary
//!
//! Pure and deterministic: feeds the caller's distribution chart or table
//! without touching any state.

use serde::Serialize;

use crate::model::{Priority, RiskItem};

/// Fixed display order, most severe first
const PRIORITY_ORDER: [Priority; 4] = [
    Priority::Critical,
    Priority::High,
    Priority::Medium,
    Priority::Low,
];

/// Count of risks sharing one priority level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// Count risks per priority category.
///
/// Absent categories default to zero and the output order is always
/// Critical, High, Medium, Low. An empty input degenerates to four zero
/// buckets.
pub fn count_by_priority(risks: &[RiskItem]) -> Vec<PriorityCount> {
    PRIORITY_ORDER
        .iter()
        .map(|&priority| PriorityCount {
            priority,
            count: risks.iter().filter(|r| r.priority == priority).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Likelihood, Severity};

    fn risk(priority: Priority) -> RiskItem {
        RiskItem {
            area: "Communication Security".to_string(),
            severity: Severity::High,
            likelihood: Likelihood::Medium,
            priority,
            action: "Implement encryption".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_all_zero_counts() {
        let counts = count_by_priority(&[]);

        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|c| c.count == 0));
    }

    #[test]
    fn output_order_is_always_critical_through_low() {
        let counts = count_by_priority(&[risk(Priority::Low), risk(Priority::Medium)]);

        let order: Vec<Priority> = counts.iter().map(|c| c.priority).collect();
        assert_eq!(
            order,
            vec![
                Priority::Critical,
                Priority::High,
                Priority::Medium,
                Priority::Low
            ]
        );
    }

    #[test]
    fn counts_sum_to_input_length() {
        let risks = vec![
            risk(Priority::Critical),
            risk(Priority::High),
            risk(Priority::High),
            risk(Priority::Low),
            risk(Priority::Medium),
            risk(Priority::High),
        ];
        let counts = count_by_priority(&risks);

        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, risks.len());
        assert_eq!(counts[0].count, 1); // Critical
        assert_eq!(counts[1].count, 3); // High
        assert_eq!(counts[2].count, 1); // Medium
        assert_eq!(counts[3].count, 1); // Low
    }
}
