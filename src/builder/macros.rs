//! Macros for declaring transition tables.

/// Build an [`FsmConfig`](crate::FsmConfig) from identifiers.
///
/// Each identifier becomes a state or event name verbatim, and states keep
/// the order they are written in.
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: Locked,
///     states: {
///         Locked => { coin => Unlocked },
///         Unlocked => { push => Locked, coin => Unlocked },
///         Broken => {},
///     }
/// };
///
/// assert_eq!(config.initial, "Locked");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::TransitionTable::new();
        $(
            states.insert(
                $crate::core::StateName::from(stringify!($state)),
                $crate::core::StateDef::new()
                    $( .on(stringify!($event), stringify!($target)) )*,
            );
        )*
        $crate::config::FsmConfig::new(stringify!($initial), states)
    }};
}
