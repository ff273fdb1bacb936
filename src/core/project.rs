//! Fixed facts about the Convex POC stack.

pub const PROJECT_NAME: &str = "Convex POC";

pub const BIN_NAME: &str = "convexctl";

/// Services that must be running for the stack to count as up.
pub const EXPECTED_SERVICES: [&str; 2] = ["convex-server", "convex-dashboard"];

pub const ENDPOINTS: &[(&str, &str)] = &[
    ("Convex Backend:  ", "http://localhost:3210"),
    ("Convex Actions:  ", "http://localhost:3211"),
    ("Convex Dashboard:", "http://localhost:6791"),
];

pub const NEXT_STEPS: &[&str] = &[
    "Generate admin key: npm run generate-admin-key",
    "Start React dev server: npm run dev",
    "Open browser: http://localhost:5173",
];
