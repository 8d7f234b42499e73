use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;
use uuid::Uuid;

/// Identifies one rendered submission form. It travels as a hidden input and comes back with
/// every submission of that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl FormId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl TryFrom<String> for FormId {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(s.trim())
            .map_err(|_| anyhow::anyhow!("The form id is not valid. Reload the page."))?;
        Ok(Self(id))
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Forms that have a submission running right now.
///
/// A browser can fire the same form twice (double click, impatient reload) before the first
/// request got an answer. Only the first one goes through.
#[derive(Debug, Default)]
pub struct InFlightSubmissions {
    forms: Mutex<HashSet<FormId>>,
}

impl InFlightSubmissions {
    /// `None` if a submission of `form_id` is already in flight.
    ///
    /// The slot is released when the returned guard is dropped, whatever path the submission
    /// took to get there.
    pub fn try_begin(&self, form_id: FormId) -> Option<InFlightGuard<'_>> {
        let mut forms = self.lock();
        if forms.insert(form_id) {
            Some(InFlightGuard {
                registry: self,
                form_id,
            })
        } else {
            None
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<FormId>> {
        // The set is left consistent even if a holder panicked: recover it.
        self.forms.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Debug)]
pub struct InFlightGuard<'a> {
    registry: &'a InFlightSubmissions,
    form_id: FormId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.form_id);
    }
}
