pub mod kpi_card;
pub mod score_bar;
pub mod toast;
pub mod verdict_badge;

pub use kpi_card::KpiCard;
pub use score_bar::ScoreBar;
pub use verdict_badge::VerdictBadge;
