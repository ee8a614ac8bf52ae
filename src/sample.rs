//! Bundled sample event log
//!
//! A small invoice-payment process: four cases moving from Start through
//! receipt, validation, approval, purchase-order matching and payment to
//! End, two of them detouring through a discrepancy resolution. The binary
//! analyses this log when no input path is given, so the tool demonstrates
//! itself out of the box.

/// Invoice-payment event log: 4 cases, 30 events.
pub const INVOICE_LOG: &str = "\
case_id,activity,timestamp
1,Start,2022-01-01 08:00:00
1,Receive Invoice,2022-01-01 08:30:00
1,Validate Invoice,2022-01-01 10:00:00
1,Approve Invoice,2022-01-01 11:00:00
1,Match Purchase Order,2022-01-01 13:00:00
1,Pay Invoice,2022-01-02 09:00:00
1,End,2022-01-02 10:00:00
2,Start,2022-01-02 09:00:00
2,Receive Invoice,2022-01-02 09:15:00
2,Validate Invoice,2022-01-02 10:30:00
2,Approve Invoice,2022-01-02 11:15:00
2,Match Purchase Order,2022-01-02 12:00:00
2,Resolve Discrepancy,2022-01-03 09:00:00
2,Pay Invoice,2022-01-04 09:00:00
2,End,2022-01-04 09:30:00
3,Start,2022-01-03 07:00:00
3,Receive Invoice,2022-01-03 08:00:00
3,Validate Invoice,2022-01-03 09:00:00
3,Match Purchase Order,2022-01-03 10:00:00
3,Approve Invoice,2022-01-03 11:30:00
3,Pay Invoice,2022-01-05 08:00:00
3,End,2022-01-05 09:00:00
4,Start,2022-01-04 08:00:00
4,Receive Invoice,2022-01-04 08:15:00
4,Validate Invoice,2022-01-04 09:00:00
4,Resolve Discrepancy,2022-01-05 10:00:00
4,Match Purchase Order,2022-01-05 11:00:00
4,Approve Invoice,2022-01-05 13:00:00
4,Pay Invoice,2022-01-06 09:00:00
4,End,2022-01-06 10:00:00
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let rows: Vec<&str> = INVOICE_LOG.lines().collect();
        assert_eq!(rows[0], "case_id,activity,timestamp");
        // Header plus 30 event rows.
        assert_eq!(rows.len(), 31);
    }

    #[test]
    fn test_sample_has_four_cases() {
        let cases: std::collections::BTreeSet<&str> = INVOICE_LOG
            .lines()
            .skip(1)
            .filter_map(|row| row.split(',').next())
            .collect();
        assert_eq!(cases.len(), 4);
    }
}
