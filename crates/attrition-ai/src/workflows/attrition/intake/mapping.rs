/// Canonical employee attribute a header column can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CanonicalField {
    Name,
    Department,
    Age,
    YearsAtCompany,
    JobSatisfaction,
    MonthlyIncome,
    Overtime,
    WorkLifeBalance,
    DistanceFromHome,
    NumCompaniesWorked,
    JobRole,
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Contains(&'static str),
    ContainsAll(&'static [&'static str]),
    Equals(&'static str),
}

impl Matcher {
    fn matches(&self, label: &str) -> bool {
        match self {
            Matcher::Contains(needle) => label.contains(needle),
            Matcher::ContainsAll(needles) => needles.iter().all(|needle| label.contains(needle)),
            Matcher::Equals(expected) => label == *expected,
        }
    }
}

// First matching rule wins, so the order is significant.
const ALIAS_RULES: &[(CanonicalField, &[Matcher])] = &[
    (CanonicalField::Name, &[Matcher::Contains("name")]),
    (
        CanonicalField::Department,
        &[Matcher::Contains("department"), Matcher::Equals("dept")],
    ),
    (CanonicalField::Age, &[Matcher::Contains("age")]),
    (
        CanonicalField::YearsAtCompany,
        &[
            Matcher::ContainsAll(&["year", "company"]),
            Matcher::Equals("yearsatcompany"),
            Matcher::Equals("tenure"),
        ],
    ),
    (
        CanonicalField::JobSatisfaction,
        &[
            Matcher::Contains("satisfaction"),
            Matcher::Equals("jobsatisfaction"),
        ],
    ),
    (
        CanonicalField::MonthlyIncome,
        &[Matcher::Contains("income"), Matcher::Equals("monthlyincome")],
    ),
    (CanonicalField::Overtime, &[Matcher::Contains("overtime")]),
    (
        CanonicalField::WorkLifeBalance,
        &[
            Matcher::Contains("worklife"),
            Matcher::Equals("worklifebalance"),
        ],
    ),
    (
        CanonicalField::DistanceFromHome,
        &[
            Matcher::Contains("distance"),
            Matcher::Equals("distancefromhome"),
        ],
    ),
    (
        CanonicalField::NumCompaniesWorked,
        &[
            Matcher::Contains("numcompanies"),
            Matcher::Equals("numcompaniesworked"),
        ],
    ),
    (
        CanonicalField::JobRole,
        &[Matcher::Contains("jobrole"), Matcher::Equals("role")],
    ),
];

/// Resolve a normalized header label to its canonical field. Separators are ignored,
/// so `Work Life Balance`, `work_life_balance` and `WorkLifeBalance` all match.
pub(crate) fn field_for_label(label: &str) -> Option<CanonicalField> {
    let compact: String = label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    ALIAS_RULES
        .iter()
        .find(|(_, matchers)| matchers.iter().any(|matcher| matcher.matches(&compact)))
        .map(|(field, _)| *field)
}
