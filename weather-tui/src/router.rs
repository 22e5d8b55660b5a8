use weather_core::CityQuery;

/// The application's two pages.
///
/// The city travels with the route as transient navigation state; `None`
/// models arriving on the weather page without one, which sends the visitor
/// straight back home.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Route {
    Home,
    Weather { city: Option<CityQuery> },
}
