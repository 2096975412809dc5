//! # TalentDesk Architecture
//!
//! TalentDesk is a **UI-agnostic domain store** for a sports talent-assessment
//! program: assessment templates, exercises, players, recruitment candidates,
//! the video review queue and an activity feed. The `talentdesk` binary is one
//! client of it; nothing here knows about terminals.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (the talentdesk CLI, or anything else)            │
//! │  - Validates typed inputs, renders results                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, shared.rs)                              │
//! │  - Thin facade over commands plus navigation state          │
//! │  - SharedApi: mutex + notification broadcast for threads    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Every transition: snapshot, next state, notification,    │
//! │    one commit                                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: snapshot + atomic commit                │
//! │  - InMemoryStore, seeded from seed.rs on every start        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`analysis`] client sits beside this stack, not inside it: remote
//! video analysis never touches the store.
//!
//! ## Key Principle: Mutations Always Notify
//!
//! Every successful mutation appends exactly one entry to the bounded
//! notification feed inside the same commit. A mutation on a missing id is a
//! documented silent no-op: nothing is committed and nothing is announced.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of transitions.
//!    This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **Analysis** (`analysis/`): HTTP behavior against a `wiremock` server.
//!
//! ## Module Overview
//!
//! - [`model`]: records, stage enums, typed inputs and patches
//! - [`store`]: `AppState`, the `DataStore` trait, the in-memory store
//! - [`commands`]: business logic
//! - [`notifications`]: the bounded feed
//! - [`navigation`]: active section, expanded groups, selected player
//! - [`analysis`]: video-analysis HTTP client
//! - [`config`]: layered configuration
//! - [`error`]: error types

pub mod analysis;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod navigation;
pub mod notifications;
pub mod seed;
pub mod shared;
pub mod store;
