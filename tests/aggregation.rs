//! Order-independence and prefix-sum checks over generated snapshots

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

use monthwise::models::{BudgetRecord, ExpenseRecord, IncomeRecord, Money, MonthBucket};
use monthwise::services::{BalanceService, BudgetService};

const CATEGORIES: [&str; 5] = ["Food", "Travel", "Utilities", "Rent/Mortgage", "Gym"];

/// Small deterministic generator so failures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn instant(rng: &mut Lcg) -> DateTime<Utc> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    start + Duration::minutes(rng.below(60 * 24 * 365) as i64)
}

fn snapshot(seed: u64) -> (Vec<IncomeRecord>, Vec<ExpenseRecord>) {
    let mut rng = Lcg(seed);
    let income = (0..40)
        .map(|i| {
            IncomeRecord::new(
                format!("i{}", i),
                Money::from_cents(rng.below(500_000) as i64),
                instant(&mut rng),
            )
        })
        .collect();
    let expenses = (0..60)
        .map(|i| {
            let category = CATEGORIES[rng.below(CATEGORIES.len() as u64) as usize];
            ExpenseRecord::new(
                format!("e{}", i),
                Money::from_cents(rng.below(300_000) as i64),
                instant(&mut rng),
            )
            .with_name(category)
        })
        .collect();
    (income, expenses)
}

fn months() -> Vec<MonthBucket> {
    (1..=12)
        .map(|m| MonthBucket::new(2024, m).unwrap())
        .chain(std::iter::once(MonthBucket::new(2025, 1).unwrap()))
        .collect()
}

#[test]
fn balances_ignore_record_order() {
    let tz = FixedOffset::east_opt(5 * 3600).unwrap();
    for seed in [1, 7, 42, 1234] {
        let (income, expenses) = snapshot(seed);
        let mut shuffled_income = income.clone();
        let mut shuffled_expenses = expenses.clone();
        shuffled_income.reverse();
        shuffled_expenses.rotate_left(17);

        let original = BalanceService::new(&income, &expenses, &tz);
        let shuffled = BalanceService::new(&shuffled_income, &shuffled_expenses, &tz);

        for bucket in months() {
            assert_eq!(original.summary(bucket), shuffled.summary(bucket));
        }
        assert_eq!(original.monthly_history(), shuffled.monthly_history());
    }
}

#[test]
fn history_is_a_running_sum_of_monthly_nets() {
    for seed in [3, 99, 2024] {
        let (income, expenses) = snapshot(seed);
        let service = BalanceService::new(&income, &expenses, &Utc);
        let history = service.monthly_history();

        assert!(!history.is_empty());
        assert_eq!(history[0].opening, Money::zero());
        for pair in history.windows(2) {
            assert_eq!(pair[0].closing, pair[1].opening);
            assert!(pair[0].bucket < pair[1].bucket);
        }
        for row in &history {
            assert_eq!(row.opening, service.rollover(row.bucket));
            assert_eq!(row.closing, row.opening + row.income - row.expenses);
        }

        let last = history[history.len() - 1];
        assert_eq!(last.closing, service.all_time_net());
        assert_eq!(service.rollover(last.bucket.next()), service.all_time_net());
    }
}

#[test]
fn month_totals_partition_all_records() {
    let (income, expenses) = snapshot(5);
    let service = BalanceService::new(&income, &expenses, &Utc);

    let income_sum: Money = months().into_iter().map(|b| service.summary(b).month_income).sum();
    let expense_sum: Money = months()
        .into_iter()
        .map(|b| service.summary(b).month_expenses)
        .sum();

    assert_eq!(income_sum, income.iter().map(|r| r.amount).sum::<Money>());
    assert_eq!(expense_sum, expenses.iter().map(|r| r.amount).sum::<Money>());
}

#[test]
fn reconciliation_ignores_expense_order() {
    let bucket = MonthBucket::new(2024, 6).unwrap();
    let budget = BudgetRecord::new("b1", bucket)
        .with_item("Food", Money::from_units(1000))
        .with_item("Travel", Money::from_units(500))
        .with_item("Utilities", Money::from_units(250));

    for seed in [11, 12, 13] {
        let (_, expenses) = snapshot(seed);
        let mut reversed = expenses.clone();
        reversed.reverse();

        let a = BudgetService::new(&expenses, &Utc).reconcile(&budget);
        let b = BudgetService::new(&reversed, &Utc).reconcile(&budget);
        assert_eq!(a, b);

        let row_total: Money = a.rows.iter().map(|r| r.actual).sum();
        assert_eq!(row_total, a.total_actual);
        assert_eq!(a.total_difference, a.total_estimated - a.total_actual);
    }
}
