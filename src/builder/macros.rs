//! Macros for ergonomic configuration construction.

/// Declare a [`Config`](crate::core::Config) inline.
///
/// State and event names are identifiers and become their own string form.
///
/// # Example
///
/// ```
/// use fsm_engine::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     idle => { start => running },
///     running => { stop => idle, crash => failed },
///     failed => {},
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states["running"].target("crash"), Some("failed"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident
        $(
            , $state:ident => {
                $($event:ident => $target:ident),* $(,)?
            }
        )*
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::core::Config::new(stringify!($initial));
        $(
            #[allow(unused_mut)]
            let mut state = $crate::core::StateConfig::default();
            $(
                state.transitions.insert(
                    stringify!($event).to_string(),
                    stringify!($target).to_string(),
                );
            )*
            config.states.insert(stringify!($state).to_string(), state);
        )*
        config
    }};
}
