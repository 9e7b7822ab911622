use crate::datemath;
use time::Date;

/// The metrics the dashboard displays.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Metric {
    Orders,
    Revenue,
    Customers,
}

impl Metric {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Metric::Orders => "Orders",
            Metric::Revenue => "Revenue",
            Metric::Customers => "Customers",
        }
    }

    pub(crate) fn format_total(self, total: u64) -> String {
        match self {
            Metric::Revenue => format!("${}", group_thousands(total)),
            Metric::Orders | Metric::Customers => group_thousands(total),
        }
    }
}

/// Source of per-day metric values.  The dashboard only ever asks for
/// single days and derives totals and orderings itself.
pub(crate) trait MetricsFeed {
    fn daily(&self, metric: Metric, date: Date) -> u64;
}

/// Deterministic stand-in for a reporting backend: every value is derived
/// from the date alone, so the dashboard behaves identically on each run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DemoFeed;

impl MetricsFeed for DemoFeed {
    fn daily(&self, metric: Metric, date: Date) -> u64 {
        let salt: u64 = match metric {
            Metric::Orders => 0x9e37_79b9,
            Metric::Revenue => 0x85eb_ca6b,
            Metric::Customers => 0xc2b2_ae35,
        };
        let mut x = u64::from(datemath::date_key(date).unsigned_abs()).wrapping_mul(salt);
        x ^= x >> 15;
        x = x.wrapping_mul(0x2545_f491_4f6c_dd1d);
        x ^= x >> 12;
        match metric {
            Metric::Orders => 20 + x % 180,
            Metric::Revenue => 1_000 + x % 9_000,
            Metric::Customers => 10 + x % 90,
        }
    }
}

pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
