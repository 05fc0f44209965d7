//! Fixed pages for extractor and router tests.

pub const FIREBALL_URL: &str = "https://www.dndbeyond.com/spells/fireball";

/// Trimmed-down copy of a real spell page: the same classes and nesting,
/// most of the surrounding chrome removed.
pub const FIREBALL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Fireball - Spells - D&amp;D Beyond</title>
</head>
<body class="body-spell">
    <header class="page-header">
        <div class="page-heading">
            <h1 class="page-title">
                Fireball
            </h1>
        </div>
    </header>
    <div class="spell-details">
        <div class="ddb-statblock ddb-statblock-spell">
            <div class="ddb-statblock-item ddb-statblock-item-level">
                <div class="ddb-statblock-item-label">Level</div>
                <div class="ddb-statblock-item-value">
                    3rd
                </div>
            </div>
            <div class="ddb-statblock-item ddb-statblock-item-casting-time">
                <div class="ddb-statblock-item-label">Casting Time</div>
                <div class="ddb-statblock-item-value">
                    1 Action
                </div>
            </div>
            <div class="ddb-statblock-item ddb-statblock-item-range-area">
                <div class="ddb-statblock-item-label">Range/Area</div>
                <div class="ddb-statblock-item-value">
                    150 ft. (20 ft.)
                </div>
            </div>
            <div class="ddb-statblock-item ddb-statblock-item-components">
                <div class="ddb-statblock-item-label">Components</div>
                <div class="ddb-statblock-item-value">
                    V, S, M *
                </div>
            </div>
            <div class="ddb-statblock-item ddb-statblock-item-duration">
                <div class="ddb-statblock-item-label">Duration</div>
                <div class="ddb-statblock-item-value">
                    Instantaneous
                </div>
            </div>
            <div class="ddb-statblock-item ddb-statblock-item-school">
                <div class="ddb-statblock-item-label">School</div>
                <div class="ddb-statblock-item-value">
                    Evocation
                </div>
            </div>
        </div>
        <div class="more-info details-more-info">
            <div class="more-info-content">
                <p>A bright streak flashes from your pointing finger.</p>
                <p><strong>At Higher Levels.</strong> The damage increases by 1d6.</p>
            </div>
            <span class="components-blurb">* - (a tiny ball of bat guano and sulfur)</span>
        </div>
        <div class="spell-image-container">
            <img class="spell-image" src="//www.dndbeyond.com/attachments/2/707/evocation.png" alt="Evocation">
        </div>
    </div>
</body>
</html>
"#;
