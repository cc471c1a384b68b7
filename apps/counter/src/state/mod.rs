//! # State Module
//!
//! Shared state handed to the command layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │     SharedDesk       │          │    CounterConfig     │            │
//! │  │  Arc<Mutex<          │          │  shop name           │            │
//! │  │    CashDesk>>        │          │  catalog path        │            │
//! │  │                      │          │  log filter          │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SharedDesk: one exclusive lock per order/done call                  │
//! │  • CounterConfig: read-only after startup                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod desk;

pub use desk::SharedDesk;
