mod activity;
mod activity_form;
mod activity_list;
mod calorie_display;
mod calorie_tracker;

pub use activity::{ActivityComp, ActivityProps};
pub use activity_form::{ActivityFormComp, ActivityFormProps};
pub use activity_list::{ActivityListComp, ActivityListProps};
pub use calorie_display::{CalorieDisplayComp, CalorieDisplayProps};
pub use calorie_tracker::{CalorieTrackerComp, CalorieTrackerProps};
