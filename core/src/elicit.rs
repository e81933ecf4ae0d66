//! Pairwise elicitation of a judgment matrix.

use saaty_types::{Element, Intensity, JudgmentMatrix, Preference, SCALE, SaatyError};
use tracing::{debug, info};

use crate::menu::MenuNavigator;

pub fn scale_title(first: &Element, second: &Element) -> String {
    format!("Comparison: {first} vs {second}")
}

pub fn direction_title() -> &'static str {
    "Which element is preferred?"
}

pub fn direction_options(first: &Element, second: &Element) -> [String; 2] {
    [
        format!("{first} is preferred over {second}"),
        format!("{second} is preferred over {first}"),
    ]
}

/// Prompts for every unordered pair and fills a reciprocal matrix.
///
/// Pairs are visited row-major: `(0,1), (0,2), .., (1,2), ..`. For each pair
/// the intensity menu comes first, then the direction menu. Any navigator
/// failure aborts the whole elicitation.
pub fn elicit<N>(navigator: &mut N, elements: &[Element]) -> Result<JudgmentMatrix, SaatyError>
where
    N: MenuNavigator + ?Sized,
{
    if elements.is_empty() {
        return Err(SaatyError::invalid_argument(
            "at least one element is required",
        ));
    }

    let mut matrix = JudgmentMatrix::neutral(elements.len())?;
    info!(
        elements = elements.len(),
        pairs = matrix.pair_count(),
        "Starting pairwise elicitation"
    );

    for (i, first) in elements.iter().enumerate() {
        for (j, second) in elements.iter().enumerate().skip(i + 1) {
            let index = navigator.select_option(SCALE.options(), &scale_title(first, second))?;
            let intensity = Intensity::from_scale_index(index)?;

            let directions = direction_options(first, second);
            let labels = [directions[0].as_str(), directions[1].as_str()];
            let direction = navigator.select_option(&labels, direction_title())?;
            let preference = Preference::from_menu_index(direction)?;

            matrix.record(i, j, intensity, preference)?;
            debug!(
                i,
                j,
                intensity = intensity.get(),
                judgment = SCALE.describe(intensity),
                ?preference,
                "Recorded judgment"
            );
        }
    }

    Ok(matrix)
}
