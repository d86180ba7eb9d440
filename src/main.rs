#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(config);
reexport!(editing);
reexport!(error);
reexport!(sql);
reexport!(testing, test);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

/// Minimal host shim: the script arrives on stdin, the recased script
/// leaves on stdout. Resolving a real document view and registering the
/// command belong to a host integration; the core only ever sees a
/// [`TextBuffer`].
fn main() -> Result {
    use std::io::Read as _;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut script = String::new();
    std::io::stdin().read_to_string(&mut script)?;

    let mut buffer = MemoryBuffer::new(script);
    let outcome = transform(Some(&mut buffer))?;
    info!("{outcome}");

    print!("{}", buffer.snapshot());
    Ok(())
}
