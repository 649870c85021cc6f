use chrono::NaiveDate;
use shared::tips::{tips_message, EMPTY_SUMMARY, TIPS_UNAVAILABLE};
use shared::{
    Category, ChatTransport, Decimal, EssentialsFilter, EssentialsStore, ExpenseDraft, ExpensePatch, FixedClock,
    HttpReply, LedgerStore, MemoryStore, RecordId, TipRequester, TipsConfig, TipsError,
};
use std::cell::RefCell;

const EXPENSES: &str = "cw_expenses_v1";
const ESSENTIALS: &str = "cw_essentials_v2";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(1_704_412_800_000, date(2024, 1, 5))
}

fn ledger(storage: &MemoryStore) -> LedgerStore<MemoryStore, FixedClock> {
    LedgerStore::open_with_clock(storage.clone(), EXPENSES, clock())
}

#[test]
fn scenario_a_single_expense_totals() {
    let mut store = ledger(&MemoryStore::new());
    store
        .add(ExpenseDraft::new(Category::Groceries, "Flour", "300").on(date(2024, 1, 5)))
        .unwrap();

    let totals = store.category_totals();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[&Category::Groceries], Decimal::from(300));
    assert_eq!(store.grand_total(), Decimal::from(300));
}

#[test]
fn scenario_b_same_category_sums() {
    let mut store = ledger(&MemoryStore::new());
    store.add(ExpenseDraft::new("Transport", "Bus pass", "150")).unwrap();
    store.add(ExpenseDraft::new("Transport", "Taxi", "250")).unwrap();

    let totals = store.category_totals();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[&Category::Transport], Decimal::from(400));
}

#[test]
fn scenario_c_add_then_remove() {
    let mut store = ledger(&MemoryStore::new());
    let id = store.add(ExpenseDraft::new(Category::Utilities, "Power", "90")).unwrap();
    assert!(store.remove(id));
    assert!(store.is_empty());
    assert!(store.category_totals().is_empty());
}

#[test]
fn scenario_d_edit_cost_only() {
    let mut store = ledger(&MemoryStore::new());
    let id = store
        .add(ExpenseDraft::new(Category::Groceries, "Flour", "300").on(date(2024, 1, 5)))
        .unwrap();

    assert_eq!(store.edit(id, ExpensePatch::default().with_cost("500")), Ok(true));

    let expense = store.get(id).unwrap();
    assert_eq!(expense.cost, Decimal::from(500));
    assert_eq!(expense.item, "Flour");
    assert_eq!(expense.category, Category::Groceries);
    assert_eq!(expense.date, date(2024, 1, 5));
    assert_eq!(store.grand_total(), Decimal::from(500));
}

#[test]
fn scenario_e_essentials_toggle_and_filter() {
    let mut store = EssentialsStore::open_with_clock(MemoryStore::new(), ESSENTIALS, clock());
    let id = store.add("Rice").unwrap();
    assert_eq!(store.toggle(id), Some(true));

    let done = store.filtered(EssentialsFilter::Done);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, id);
    assert!(done[0].done);
    assert!(store.filtered(EssentialsFilter::Pending).is_empty());
}

struct RecordingTransport {
    reply: HttpReply,
    bodies: RefCell<Vec<String>>,
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for RecordingTransport {
    async fn post_json(&self, _url: &str, _bearer: Option<&str>, body: String) -> Result<HttpReply, TipsError> {
        self.bodies.borrow_mut().push(body);
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn scenario_f_empty_totals_and_provider_error() {
    let store = ledger(&MemoryStore::new());
    let transport = RecordingTransport {
        reply: HttpReply { status: 500, body: "upstream failure".into() },
        bodies: RefCell::new(Vec::new()),
    };
    let config = TipsConfig { api_key: Some("sk-test".into()), ..TipsConfig::default() };
    let requester = TipRequester::new(transport, config);

    let totals = store.category_totals();
    let request = requester.build_request(&totals);
    assert!(request.messages[0].content.contains(&format!("Spending: {}", EMPTY_SUMMARY)));

    let result = requester.request_tips(&totals).await;
    assert_eq!(result, Err(TipsError::Provider { status: 500, body: "upstream failure".into() }));
    assert_eq!(tips_message(&result), TIPS_UNAVAILABLE);
}

#[test]
fn adds_count_only_valid_drafts_and_ids_resolve() {
    let mut store = ledger(&MemoryStore::new());
    let drafts = vec![
        ExpenseDraft::new(Category::Groceries, "Flour", "300"),
        ExpenseDraft::new(Category::Groceries, "", "10"),
        ExpenseDraft::new(Category::Healthcare, "Clinic", "120.5"),
        ExpenseDraft::new(Category::Other, "Gift", ""),
        ExpenseDraft::new("Snacks", "Chips", "15"),
    ];

    let ids: Vec<RecordId> = drafts.into_iter().filter_map(|d| store.add(d).ok()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(store.len(), 3);
    for id in ids {
        assert!(store.get(id).is_some());
    }
}

#[test]
fn remove_twice_changes_nothing_the_second_time() {
    let storage = MemoryStore::new();
    let mut store = ledger(&storage);
    let id = store.add(ExpenseDraft::new(Category::Other, "Soap", "5")).unwrap();
    store.add(ExpenseDraft::new(Category::Other, "Tea", "7")).unwrap();

    assert!(store.remove(id));
    let after_first = (store.expenses().to_vec(), storage.get(EXPENSES));
    assert!(!store.remove(id));
    assert_eq!((store.expenses().to_vec(), storage.get(EXPENSES)), after_first);
}

#[test]
fn saved_ledger_reloads_equal() {
    let storage = MemoryStore::new();
    let mut store = ledger(&storage);
    store.add(ExpenseDraft::new(Category::Groceries, "Flour", "300").on(date(2024, 1, 5))).unwrap();
    store.add(ExpenseDraft::new("Snacks", "Chips", "12.75").on(date(2024, 2, 1))).unwrap();
    store.add(ExpenseDraft::new(Category::Transport, "Bus", "0")).unwrap();
    store.add(ExpenseDraft::new(Category::Utilities, "Deposit", "999999999999.99")).unwrap();
    store.add(ExpenseDraft::new(Category::Other, "Gold", "12345678901.123456789")).unwrap();
    store.add(ExpenseDraft::new(Category::Other, "Stamp", "0.1")).unwrap();

    let reloaded = ledger(&storage);
    assert_eq!(reloaded.expenses(), store.expenses());

    let mut essentials = EssentialsStore::open_with_clock(storage.clone(), ESSENTIALS, clock());
    let rice = essentials.add("Rice").unwrap();
    essentials.add("Oil").unwrap();
    essentials.toggle(rice);
    let essentials_reloaded = EssentialsStore::open_with_clock(storage.clone(), ESSENTIALS, clock());
    assert_eq!(essentials_reloaded.items(), essentials.items());
}

#[test]
fn legacy_unversioned_ledger_is_migrated() {
    let legacy = r#"[
        {"id": 1704412800001, "category": "Groceries", "item": "Flour", "cost": 300, "date": "2024-01-05"},
        {"id": 1704412800002, "category": "Quick add", "item": "Bread", "cost": "", "date": "2024-01-06"}
    ]"#;
    let storage = MemoryStore::new().with_entry(EXPENSES, legacy);
    let mut store = ledger(&storage);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(RecordId(1704412800002)).unwrap().cost, Decimal::ZERO);
    assert_eq!(store.get(RecordId(1704412800002)).unwrap().category, Category::parse("Quick add"));
    assert_eq!(store.take_storage_notice(), None);

    store.add(ExpenseDraft::new(Category::Other, "Soap", "5")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&storage.get(EXPENSES).unwrap()).unwrap();
    assert_eq!(saved["version"], 2);
    assert_eq!(saved["items"].as_array().unwrap().len(), 3);
}

#[test]
fn corrupt_storage_starts_empty_with_notice() {
    let storage = MemoryStore::new().with_entry(EXPENSES, "{{{ not json");
    let mut store = ledger(&storage);
    assert!(store.is_empty());
    assert!(store.take_storage_notice().is_some());
}

#[test]
fn legacy_records_without_dates_survive_migration() {
    let legacy = r#"[
        {"id": 1704412800001, "category": "Groceries", "item": "Flour", "cost": 300, "date": "2024-01-05"},
        {"id": 1704412800002, "category": "Groceries", "item": "Rice", "cost": 50, "date": ""},
        {"id": 1704499200003, "category": "Other", "item": "Tea", "cost": 4}
    ]"#;
    let storage = MemoryStore::new().with_entry(EXPENSES, legacy);
    let mut store = ledger(&storage);

    assert_eq!(store.len(), 3);
    assert_eq!(store.take_storage_notice(), None);
    assert_eq!(store.get(RecordId(1704412800002)).unwrap().date, date(2024, 1, 5));
    assert_eq!(store.get(RecordId(1704499200003)).unwrap().date, date(2024, 1, 6));

    store.add(ExpenseDraft::new(Category::Other, "Soap", "5")).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(ledger(&storage).len(), 4);
}

#[test]
fn newer_version_payload_is_kept_after_a_change() {
    let newer = r#"{"version":3,"items":[{"id":1,"category":"Groceries","item":"Flour","cost":300,"date":"2024-01-05"}]}"#;
    let storage = MemoryStore::new().with_entry(EXPENSES, newer);
    let mut store = ledger(&storage);
    assert!(store.is_empty());
    assert!(store.take_storage_notice().is_some());

    store.add(ExpenseDraft::new(Category::Other, "Soap", "5")).unwrap();

    assert_eq!(storage.get("cw_expenses_v1.unreadable").as_deref(), Some(newer));
    assert_eq!(ledger(&storage).len(), 1);
}

#[test]
fn malformed_payload_is_kept_after_a_change() {
    let storage = MemoryStore::new().with_entry(EXPENSES, "{{{ not json");
    let mut store = ledger(&storage);

    store.add(ExpenseDraft::new(Category::Other, "Soap", "5")).unwrap();

    assert_eq!(storage.get("cw_expenses_v1.unreadable").as_deref(), Some("{{{ not json"));
}
