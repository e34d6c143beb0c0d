pub mod app;
pub mod chart_canvas;
pub mod event_card;
pub mod events_view;
pub mod header;
pub mod login_view;
pub mod overview_view;
pub mod region_details;
pub mod reports_view;
pub mod settings_view;
pub mod sidebar;
pub mod trend_chart;
