pub mod dashboard;
pub mod evaluate;
pub mod login;
pub mod matching;
pub mod privacy;
pub mod results;

pub use dashboard::DashboardPage;
pub use evaluate::EvaluatePage;
pub use login::LoginPage;
pub use matching::MatchingPage;
pub use privacy::PrivacyPage;
pub use results::ResultsPage;
