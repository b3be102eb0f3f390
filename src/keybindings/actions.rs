//! Action definitions for keyboard navigation.

// ============================================================================
// Global Actions - Work in any context
// ============================================================================

pub mod global {
    use gpui::actions;

    actions!(
        global,
        [
            // Focus
            Escape,
            // Session
            Disconnect,
            // Help
            ShowHelp,
            HideHelp,
        ]
    );
}

// ============================================================================
// Bucket Browser Actions
// ============================================================================

pub mod buckets {
    use gpui::actions;

    actions!(
        buckets,
        [
            Refresh,
            NewBucket,
            PrevPage,
            NextPage,
        ]
    );
}
