// ---------------------------------
// enum for managing callbacks
// ---------------------------------

pub(crate) type CallbackFcn<I> = Box<dyn FnMut(&I)>;

#[derive(Default)]
pub(crate) enum Callback<I> {
    #[default]
    None,
    Rust(CallbackFcn<I>),
}

impl<I> Callback<I> {
    // Call the callback function
    fn call(&mut self, info: &I) {
        match self {
            Callback::None => {}
            Callback::Rust(f) => f(info),
        }
    }
}

impl<I> std::fmt::Debug for Callback<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callback::None => write!(f, "Callback::None"),
            Callback::Rust(_) => write!(f, "Callback::Rust"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct SolverCallbacks<I> {
    /// callback for every iteration record
    pub iteration_callback: Callback<I>,
}

impl<I> Default for SolverCallbacks<I> {
    // Create a new set of callbacks
    fn default() -> Self {
        Self {
            iteration_callback: Callback::None,
        }
    }
}

impl<I> SolverCallbacks<I> {
    pub(crate) fn notify_iteration(&mut self, info: &I) {
        self.iteration_callback.call(info)
    }
}
