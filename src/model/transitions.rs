//! # Transition Tables
//!
//! The legal status changes for orders and tables, written down as data.
//!
//! Each row names an event, the states it may fire from and the state it leads
//! to. Services never compare statuses inline; they look the event up here and
//! either get the destination state back or an `InvalidState` error that names
//! the current state and the allowed sources. That keeps the whole legal
//! transition set in one auditable place.
//!
//! ```text
//! Order (kitchen)   CREATED --submit--> SUBMITTED --start_preparing--> IN_PREP --mark_ready--> READY
//! Order (billing)   <any> --serve--> SERVED         <open> --pay--> PAID
//! Table             FREE --seat--> OCCUPIED --request_bill--> WAITING_FOR_BILL --clear--> FREE
//! ```
//!
//! Two cross-layer rules are left loose by default: serving an order that has
//! not reached `READY`, and removing dishes from an order the kitchen already
//! has. [`TransitionPolicy::Strict`] closes both.

use crate::error::{RestaurantError, Result};
use crate::model::{OrderStatus, TableStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How strictly cross-layer order rules are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Orders may be served from any state and edited at any time.
    #[default]
    Lenient,
    /// Orders must be `READY` to be served and `CREATED` to be edited.
    Strict,
}

/// Events that move an order between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderEvent {
    Submit,
    StartPreparing,
    MarkReady,
    Serve,
    Pay,
}

impl Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderEvent::Submit => "submit",
            OrderEvent::StartPreparing => "start_preparing",
            OrderEvent::MarkReady => "mark_ready",
            OrderEvent::Serve => "serve",
            OrderEvent::Pay => "pay",
        };
        f.write_str(name)
    }
}

/// Events that move a table between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEvent {
    Seat,
    OpenOrder,
    RequestBill,
    Clear,
}

impl Display for TableEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TableEvent::Seat => "seat",
            TableEvent::OpenOrder => "open_order",
            TableEvent::RequestBill => "request_bill",
            TableEvent::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// One row of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<E: 'static, S: 'static> {
    pub event: E,
    pub from: &'static [S],
    pub to: S,
}

pub type OrderTransition = Transition<OrderEvent, OrderStatus>;
pub type TableTransition = Transition<TableEvent, TableStatus>;

impl<E, S> Transition<E, S>
where
    E: Copy + Display + 'static,
    S: Copy + PartialEq + Display + 'static,
{
    /// Returns the destination state if `current` is an allowed source.
    ///
    /// `subject` names the order or table in the error message.
    pub fn apply(&self, subject: impl Display, current: S) -> Result<S> {
        if self.from.contains(&current) {
            return Ok(self.to);
        }
        let allowed = self
            .from
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(RestaurantError::InvalidState(format!(
            "{subject} is {current}; {} requires one of [{allowed}]",
            self.event
        )))
    }
}

const OPEN_ORDER: &[OrderStatus] = &OrderStatus::OPEN;

pub const LENIENT_ORDER_TRANSITIONS: &[OrderTransition] = &[
    Transition {
        event: OrderEvent::Submit,
        from: &[OrderStatus::Created],
        to: OrderStatus::Submitted,
    },
    Transition {
        event: OrderEvent::StartPreparing,
        from: &[OrderStatus::Submitted],
        to: OrderStatus::InPrep,
    },
    Transition {
        event: OrderEvent::MarkReady,
        from: &[OrderStatus::InPrep],
        to: OrderStatus::Ready,
    },
    Transition {
        event: OrderEvent::Serve,
        from: &OrderStatus::ALL,
        to: OrderStatus::Served,
    },
    Transition {
        event: OrderEvent::Pay,
        from: OPEN_ORDER,
        to: OrderStatus::Paid,
    },
];

pub const STRICT_ORDER_TRANSITIONS: &[OrderTransition] = &[
    Transition {
        event: OrderEvent::Submit,
        from: &[OrderStatus::Created],
        to: OrderStatus::Submitted,
    },
    Transition {
        event: OrderEvent::StartPreparing,
        from: &[OrderStatus::Submitted],
        to: OrderStatus::InPrep,
    },
    Transition {
        event: OrderEvent::MarkReady,
        from: &[OrderStatus::InPrep],
        to: OrderStatus::Ready,
    },
    Transition {
        event: OrderEvent::Serve,
        from: &[OrderStatus::Ready],
        to: OrderStatus::Served,
    },
    Transition {
        event: OrderEvent::Pay,
        from: OPEN_ORDER,
        to: OrderStatus::Paid,
    },
];

pub const TABLE_TRANSITIONS: &[TableTransition] = &[
    Transition {
        event: TableEvent::Seat,
        from: &[TableStatus::Free, TableStatus::Occupied, TableStatus::WaitingForBill],
        to: TableStatus::Occupied,
    },
    Transition {
        event: TableEvent::OpenOrder,
        from: &[TableStatus::Occupied],
        to: TableStatus::Occupied,
    },
    Transition {
        event: TableEvent::RequestBill,
        from: &[TableStatus::Occupied],
        to: TableStatus::WaitingForBill,
    },
    Transition {
        event: TableEvent::Clear,
        from: &[TableStatus::Free, TableStatus::Occupied, TableStatus::WaitingForBill],
        to: TableStatus::Free,
    },
];

/// Statuses in which dish lines may be removed under the strict policy.
pub const STRICT_EDITABLE: &[OrderStatus] = &[OrderStatus::Created];

fn lookup<E, S>(rows: &'static [Transition<E, S>], event: E) -> Result<&'static Transition<E, S>>
where
    E: PartialEq + Display + 'static,
    S: 'static,
{
    rows.iter()
        .find(|row| row.event == event)
        .ok_or_else(|| {
            RestaurantError::InvalidState(format!("no transition defined for {event}"))
        })
}

impl TransitionPolicy {
    pub fn order_transitions(self) -> &'static [OrderTransition] {
        match self {
            TransitionPolicy::Lenient => LENIENT_ORDER_TRANSITIONS,
            TransitionPolicy::Strict => STRICT_ORDER_TRANSITIONS,
        }
    }

    /// Looks up the status `event` moves an order to from `current`.
    pub fn next_order_status(
        self,
        event: OrderEvent,
        subject: impl Display,
        current: OrderStatus,
    ) -> Result<OrderStatus> {
        lookup(self.order_transitions(), event)?.apply(subject, current)
    }

    /// Checks whether dish lines may be removed from an order in `current`.
    pub fn check_dish_removal(self, subject: impl Display, current: OrderStatus) -> Result<()> {
        match self {
            TransitionPolicy::Lenient => Ok(()),
            TransitionPolicy::Strict if STRICT_EDITABLE.contains(&current) => Ok(()),
            TransitionPolicy::Strict => Err(RestaurantError::InvalidState(format!(
                "{subject} is {current}; dishes can only be removed before submission"
            ))),
        }
    }
}

/// Looks up the status `event` moves a table to from `current`.
pub fn next_table_status(
    event: TableEvent,
    subject: impl Display,
    current: TableStatus,
) -> Result<TableStatus> {
    lookup(TABLE_TRANSITIONS, event)?.apply(subject, current)
}
