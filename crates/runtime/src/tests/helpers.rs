// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Wizard, WizardConfig};
use signup::Session;
use signup_analytics::DataLayer;
use signup_domain::Stage;
use std::sync::Arc;

/// Creates a wizard with default timing that records analytics.
pub fn create_test_wizard() -> (Wizard, Arc<DataLayer>) {
    let data_layer: Arc<DataLayer> = Arc::new(DataLayer::new(64));
    let wizard: Wizard = Wizard::new(WizardConfig::default(), data_layer.clone());
    (wizard, data_layer)
}

/// Drives a wizard to the verification step.
pub async fn advance_to_verification(wizard: &Wizard) -> Session {
    wizard.submit_email("dev@example.com").unwrap();
    let session: Session = wizard.settled().await;
    assert_eq!(session.stage, Stage::PreferenceSelection);

    wizard.toggle_category("web-dev").unwrap();
    wizard.submit_preferences().unwrap();
    let session: Session = wizard.settled().await;
    assert_eq!(session.stage, Stage::Verification);
    session
}
