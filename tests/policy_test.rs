use restaurant_sim::config::SystemConfig;
use restaurant_sim::lifecycle::RestaurantSystem;
use restaurant_sim::model::{
    DishId, OrderId, OrderStatus, TableNumber, TableStatus, TransitionPolicy,
};
use restaurant_sim::{Decimal, ErrorKind};

fn system_with(policy: TransitionPolicy) -> RestaurantSystem {
    let config = SystemConfig {
        policy,
        ..SystemConfig::default()
    };
    RestaurantSystem::from_config(config).expect("Failed to build system")
}

fn submitted_order(system: &mut RestaurantSystem, table: TableNumber) -> OrderId {
    system.seat(table, 2).unwrap();
    system.open_order(table).unwrap();
    system.add_dish(table, DishId(2), 1).unwrap();
    system.add_dish(table, DishId(5), 2).unwrap();
    system.submit_order(table).unwrap()
}

#[test]
fn test_lenient_policy_serves_and_edits_early() {
    let mut system = system_with(TransitionPolicy::Lenient);
    let table = TableNumber(3);
    let order_id = submitted_order(&mut system, table);

    assert!(system.kitchen().remove_dish_from_order(order_id, DishId(5)).unwrap());
    system.billing().mark_served(table).unwrap();

    let order = system.orders().get_order(order_id).unwrap();
    assert_eq!(order.borrow().status(), OrderStatus::Served);
    assert_eq!(order.borrow().total_price(), Decimal::from(54));
}

#[test]
fn test_strict_policy_gates_serving_and_editing() {
    let mut system = system_with(TransitionPolicy::Strict);
    let table = TableNumber(3);
    let order_id = submitted_order(&mut system, table);

    let err = system.kitchen().remove_dish_from_order(order_id, DishId(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let err = system.billing().mark_served(table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    system.kitchen().start_preparing(order_id).unwrap();
    system.kitchen().order_is_ready(order_id).unwrap();
    system.billing().mark_served(table).unwrap();

    let order = system.orders().get_order(order_id).unwrap();
    assert_eq!(order.borrow().status(), OrderStatus::Served);
    assert_eq!(order.borrow().line_count(), 2);
}

#[test]
fn test_pay_requires_a_requested_bill() {
    let mut system = system_with(TransitionPolicy::Lenient);
    let table = TableNumber(4);
    submitted_order(&mut system, table);

    let err = system.billing().pay(table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(system.tables().status(table).unwrap(), TableStatus::Occupied);

    system.billing().request_bill(table).unwrap();
    assert_eq!(system.billing().pay(table).unwrap(), Decimal::from(90));
    assert_eq!(system.billing().pay(table).unwrap_err().kind(), ErrorKind::InvalidState);
}

#[test]
fn test_boundaries_leave_state_unchanged() {
    let mut system = system_with(TransitionPolicy::Lenient);
    let table = TableNumber(1);

    let err = system.seat(table, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(system.tables().status(table).unwrap(), TableStatus::Free);

    system.seat(table, 2).unwrap();
    system.open_order(table).unwrap();
    let err = system.billing().request_bill(table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(system.tables().status(table).unwrap(), TableStatus::Occupied);

    let err = system.seat(TableNumber(42), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
