mod dashboard;

pub use dashboard::SalesOverviewDashboard;
