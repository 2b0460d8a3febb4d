//! Fixed symbols referenced while classifying hosts and emitting companions.

/// The universal root of every class hierarchy.
pub const ROOT_TYPE: &str = "java.lang.Object";

/// The platform's original activity base class.
pub const LEGACY_ACTIVITY: &str = "android.app.Activity";

/// The support library's activity base class.
pub const COMPAT_ACTIVITY: &str = "android.support.v4.app.FragmentActivity";

/// Lifecycle container imported for hosts extending [`LEGACY_ACTIVITY`].
pub const LEGACY_FRAGMENT: &str = "android.app.Fragment";

/// Lifecycle container imported for hosts extending [`COMPAT_ACTIVITY`].
pub const COMPAT_FRAGMENT: &str = "android.support.v4.app.Fragment";

/// Simple name of the lifecycle container every companion extends.
pub const FRAGMENT: &str = "Fragment";

/// Parameter type of both copy methods.
pub const ACTIVITY_IMPORT: &str = "android.app.Activity";

/// Simple name of [`ACTIVITY_IMPORT`].
pub const ACTIVITY: &str = "Activity";

/// Default namespace of the runtime library the companions link against.
pub const LIB_PACKAGE: &str = "com.github.mttkay.memento";

/// Simple name of the copy contract inside the library namespace.
pub const MEMENTO_METHODS: &str = "MementoMethods";

/// Appended to the host's simple name to form the companion's name.
pub const MEMENTO_SUFFIX: &str = "$Memento";

/// Sole statement of the companion's constructor.
pub const RETAIN_INSTANCE_STATEMENT: &str = "setRetainInstance(true)";

/// Name of the local the copy methods narrow their parameter into.
pub const NARROWED_LOCAL: &str = "activity";

/// Returns `true` for the framework types a hierarchy walk stops at.
pub fn is_framework_type(qualified_name: &str) -> bool {
    matches!(qualified_name, ROOT_TYPE | LEGACY_ACTIVITY | COMPAT_ACTIVITY)
}
