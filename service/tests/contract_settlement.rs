//! End-to-end [`Contract`] flows over the in-memory database.
//!
//! [`Contract`]: service::domain::Contract

use common::{Money, Percent};
use rust_decimal::Decimal;
use service::{
    command::{
        log_work_hours, record_contract_payment, CompleteContract,
        CreateContract, LogWorkHours, RecordContractPayment,
    },
    domain::{
        contract::{self, terms},
        employee, payment, status, work_log, Contract,
    },
    infra::InMemory,
    query::{self, report::statement, report::Statement},
    Command as _, Config, Service,
};
use tracerr::Traced;

fn service() -> Service<InMemory> {
    Service::new(Config::default(), InMemory::new())
}

fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

fn percent(s: &str) -> Percent {
    s.parse().unwrap()
}

fn hourly(rate: &str, required_hours: Option<&str>) -> contract::Terms {
    contract::Terms {
        kind: contract::Kind::Hourly,
        rate: money(rate),
        workday_hours: None,
        required_hours: required_hours
            .map(|h| terms::RequiredHours::new(decimal(h)).unwrap()),
        required_days: None,
    }
}

async fn create(svc: &Service<InMemory>, terms: contract::Terms) -> Contract {
    svc.execute(CreateContract {
        title: contract::Title::new("Facade works").unwrap(),
        terms,
    })
    .await
    .unwrap()
}

async fn log(
    svc: &Service<InMemory>,
    contract_id: contract::Id,
    employee_id: employee::Id,
    date: &str,
    hours: &str,
) -> work_log::Entry {
    svc.execute(LogWorkHours {
        contract_id,
        employee_id,
        date: date.parse().unwrap(),
        hours: work_log::Hours::new(decimal(hours)).unwrap(),
    })
    .await
    .unwrap()
}

async fn pay(
    svc: &Service<InMemory>,
    contract_id: contract::Id,
    amount: &str,
    status: payment::Status,
) -> Result<
    service::domain::Payment,
    Traced<record_contract_payment::ExecutionError>,
> {
    svc.execute(RecordContractPayment {
        contract_id,
        amount: money(amount),
        status,
        paid_on: "2024-02-01".parse().unwrap(),
    })
    .await
}

async fn statement(
    svc: &Service<InMemory>,
    contract_id: contract::Id,
) -> statement::Output {
    svc.execute(Statement { contract_id })
        .await
        .unwrap()
        .unwrap()
}

async fn stored(svc: &Service<InMemory>, id: contract::Id) -> Contract {
    svc.execute(query::contract::ById::by(id))
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn logged_hours_accrue_into_the_statement() {
    let svc = service();
    let c = create(&svc, hourly("10USD", Some("100"))).await;
    let worker = employee::Id::new();

    let first = log(&svc, c.id, worker, "2024-01-10", "8").await;
    let second = log(&svc, c.id, worker, "2024-01-20", "4").await;
    let third = log(&svc, c.id, worker, "2024-02-05", "6").await;

    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.accrual.total_hours, decimal("18"));
    assert_eq!(stmt.accrual.total_earned, money("180USD"));
    assert_eq!(stmt.accrual.per_entry[&first.id], money("80USD"));
    assert_eq!(stmt.accrual.per_entry[&second.id], money("40USD"));
    assert_eq!(stmt.accrual.per_entry[&third.id], money("60USD"));
    assert_eq!(
        stmt.accrual
            .months
            .keys()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        ["2024-01", "2024-02"],
    );
    assert_eq!(stmt.progress, percent("18"));
    assert_eq!(stmt.balance.total_paid, money("0USD"));
    assert_eq!(stmt.balance.remaining, money("180USD"));
    assert!(!stmt.balance.is_fully_paid);
}

#[tokio::test]
async fn hour_boundaries_accrue_exactly() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    let worker = employee::Id::new();

    log(&svc, c.id, worker, "2024-03-01", "0.1").await;
    log(&svc, c.id, worker, "2024-03-02", "24").await;

    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.accrual.total_hours, decimal("24.1"));
    assert_eq!(stmt.accrual.total_earned, money("241USD"));
    // No declared target, so no progress to estimate.
    assert_eq!(stmt.progress, Percent::ZERO);
}

#[tokio::test]
async fn daily_terms_bill_by_the_workday() {
    let svc = service();
    let c = create(
        &svc,
        contract::Terms {
            kind: contract::Kind::Daily,
            rate: money("160USD"),
            workday_hours: terms::WorkdayHours::new(8),
            required_hours: None,
            required_days: terms::RequiredDays::new(decimal("2")),
        },
    )
    .await;
    let worker = employee::Id::new();

    log(&svc, c.id, worker, "2024-01-10", "8").await;
    log(&svc, c.id, worker, "2024-01-11", "4").await;
    log(&svc, c.id, worker, "2024-01-12", "4").await;

    let stmt = statement(&svc, c.id).await;
    // 160USD per 8-hour workday is 20USD per hour.
    assert_eq!(stmt.accrual.total_earned, money("320USD"));
    // 16 hours over 8-hour workdays is 2 of the 2 required days.
    assert_eq!(stmt.progress, Percent::HUNDRED);
}

#[tokio::test]
async fn monthly_terms_default_the_full_month_norm() {
    let svc = service();
    let c = create(
        &svc,
        contract::Terms {
            kind: contract::Kind::Monthly,
            rate: money("2700USD"),
            workday_hours: None,
            required_hours: None,
            required_days: None,
        },
    )
    .await;
    let worker = employee::Id::new();

    log(&svc, c.id, worker, "2024-01-10", "24").await;
    log(&svc, c.id, worker, "2024-01-11", "3").await;

    // 2700USD over the default 270-hour norm is 10USD per hour.
    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.accrual.total_earned, money("270USD"));
}

#[tokio::test]
async fn one_entry_per_contract_employee_and_date() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    let worker = employee::Id::new();

    log(&svc, c.id, worker, "2024-01-10", "8").await;

    let err = svc
        .execute(LogWorkHours {
            contract_id: c.id,
            employee_id: worker,
            date: "2024-01-10".parse().unwrap(),
            hours: work_log::Hours::new(decimal("2")).unwrap(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        log_work_hours::ExecutionError::AlreadyLogged(..),
    ));

    // The failed transaction left no partial state behind.
    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.accrual.per_entry.len(), 1);
    assert_eq!(stmt.accrual.total_hours, decimal("8"));

    // Another employee is free to log the same date.
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "8").await;
    assert_eq!(
        statement(&svc, c.id).await.accrual.total_hours,
        decimal("16"),
    );
}

#[tokio::test]
async fn completed_contract_takes_no_more_hours() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;

    let completed = svc
        .execute(CompleteContract { contract_id: c.id })
        .await
        .unwrap();
    assert!(!completed.is_active());

    let err = svc
        .execute(LogWorkHours {
            contract_id: c.id,
            employee_id: employee::Id::new(),
            date: "2024-01-10".parse().unwrap(),
            hours: work_log::Hours::new(decimal("8")).unwrap(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        log_work_hours::ExecutionError::ContractNotActive(..),
    ));
}

#[tokio::test]
async fn full_payment_settles_the_contract() {
    let svc = service();
    let c = create(&svc, hourly("10USD", Some("10"))).await;
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "10").await;

    drop(pay(&svc, c.id, "40USD", payment::Status::Completed).await.unwrap());
    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.balance.total_paid, money("40USD"));
    assert_eq!(stmt.balance.remaining, money("60USD"));
    assert!(!stmt.balance.is_fully_paid);
    assert!(!stored(&svc, c.id).await.is_settled());

    drop(pay(&svc, c.id, "60USD", payment::Status::Completed).await.unwrap());
    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.balance.remaining, money("0USD"));
    assert!(stmt.balance.is_fully_paid);

    let settled = stored(&svc, c.id).await;
    assert!(settled.is_settled());
    assert_eq!(
        settled.status(),
        status::Status {
            settlement: status::Settlement::Settled,
            engagement: status::Engagement::Active,
        },
    );
}

#[tokio::test]
async fn pending_payments_do_not_settle() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "10").await;

    drop(pay(&svc, c.id, "100USD", payment::Status::Pending).await.unwrap());
    let stmt = statement(&svc, c.id).await;
    assert_eq!(stmt.balance.total_paid, money("0USD"));
    assert_eq!(stmt.balance.remaining, money("100USD"));
    assert!(!stored(&svc, c.id).await.is_settled());

    // Only a completed payment covers the balance.
    drop(pay(&svc, c.id, "100USD", payment::Status::Completed).await.unwrap());
    assert!(stored(&svc, c.id).await.is_settled());
}

#[tokio::test]
async fn payment_may_not_exceed_the_remaining_balance() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "10").await;

    let err =
        pay(&svc, c.id, "150USD", payment::Status::Completed).await.unwrap_err();
    assert!(matches!(
        err.as_ref(),
        record_contract_payment::ExecutionError::ExceedsRemaining(..),
    ));

    drop(pay(&svc, c.id, "70USD", payment::Status::Completed).await.unwrap());
    let err =
        pay(&svc, c.id, "40USD", payment::Status::Completed).await.unwrap_err();
    assert!(matches!(
        err.as_ref(),
        record_contract_payment::ExecutionError::ExceedsRemaining(..),
    ));

    drop(pay(&svc, c.id, "30USD", payment::Status::Completed).await.unwrap());
    assert!(stored(&svc, c.id).await.is_settled());
}

#[tokio::test]
async fn settlement_and_completion_are_orthogonal() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "5").await;

    svc.execute(CompleteContract { contract_id: c.id })
        .await
        .map(drop)
        .unwrap();

    // The outstanding balance may still be paid off after completion.
    drop(pay(&svc, c.id, "50USD", payment::Status::Completed).await.unwrap());

    assert_eq!(
        stored(&svc, c.id).await.status(),
        status::Status {
            settlement: status::Settlement::Settled,
            engagement: status::Engagement::Ended,
        },
    );
}

#[tokio::test]
async fn non_positive_rate_is_rejected() {
    let svc = service();

    let err = svc
        .execute(CreateContract {
            title: contract::Title::new("Facade works").unwrap(),
            terms: hourly("0USD", None),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        service::command::create_contract::ExecutionError::NonPositiveRate(..),
    ));
}

#[tokio::test]
async fn non_positive_payment_is_rejected() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "10").await;

    for amount in ["0USD", "-5USD"] {
        let err =
            pay(&svc, c.id, amount, payment::Status::Completed).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            record_contract_payment::ExecutionError::NonPositiveAmount(..),
        ));
    }
}

#[tokio::test]
async fn payment_currency_must_match_the_contract() {
    let svc = service();
    let c = create(&svc, hourly("10USD", None)).await;
    log(&svc, c.id, employee::Id::new(), "2024-01-10", "10").await;

    let err =
        pay(&svc, c.id, "50EUR", payment::Status::Completed).await.unwrap_err();
    assert!(matches!(
        err.as_ref(),
        record_contract_payment::ExecutionError::CurrencyMismatch(..),
    ));
}

#[tokio::test]
async fn unknown_contract_has_no_statement() {
    let svc = service();

    let stmt = svc
        .execute(Statement {
            contract_id: contract::Id::new(),
        })
        .await
        .unwrap();
    assert!(stmt.is_none());

    let err = pay(
        &svc,
        contract::Id::new(),
        "50USD",
        payment::Status::Completed,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        record_contract_payment::ExecutionError::ContractNotExists(..),
    ));
}
