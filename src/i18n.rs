//! Pre-translated strings for each supported language.

use crate::config::Language;

/// Read-only translation bundle. Day arrays are indexed by weekday number,
/// 0=Sunday..6=Saturday.
#[derive(Debug)]
pub struct Translations {
    pub days: [&'static str; 7],
    pub days_short: [&'static str; 7],
    pub months: [&'static str; 12],
    pub notes: &'static str,
    pub week: &'static str,
    pub reflections: &'static str,
    pub planning: &'static str,
}

impl Translations {
    /// Short name for a weekday number; values wrap modulo 7.
    pub fn short_day(&self, weekday: u32) -> &'static str {
        self.days_short[(weekday % 7) as usize]
    }

    pub fn day(&self, weekday: u32) -> &'static str {
        self.days[(weekday % 7) as usize]
    }

    /// Month name for a 1-based month number.
    pub fn month(&self, month: u32) -> &'static str {
        self.months[((month + 11) % 12) as usize]
    }
}

const EN: Translations = Translations {
    days: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    days_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    notes: "Notes",
    week: "Week",
    reflections: "Weekly Reflections",
    planning: "Weekly Planning",
};

const ES: Translations = Translations {
    days: [
        "Domingo", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado",
    ],
    days_short: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
    months: [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
        "Septiembre", "Octubre", "Noviembre", "Diciembre",
    ],
    notes: "Notas",
    week: "Semana",
    reflections: "Reflexiones Semanales",
    planning: "Planificación Semanal",
};

const FR: Translations = Translations {
    days: [
        "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
    ],
    days_short: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
    months: [
        "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août",
        "Septembre", "Octobre", "Novembre", "Décembre",
    ],
    notes: "Notes",
    week: "Semaine",
    reflections: "Réflexions Hebdomadaires",
    planning: "Planification Hebdomadaire",
};

const DE: Translations = Translations {
    days: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    days_short: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
        "September", "Oktober", "November", "Dezember",
    ],
    notes: "Notizen",
    week: "Woche",
    reflections: "Wöchentliche Reflexionen",
    planning: "Wochenplanung",
};

impl Language {
    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Es => &ES,
            Language::Fr => &FR,
            Language::De => &DE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_days_start_on_sunday() {
        let t = Language::En.translations();
        assert_eq!(t.short_day(0), "Sun");
        assert_eq!(t.short_day(1), "Mon");
        assert_eq!(t.short_day(6), "Sat");
        assert_eq!(t.short_day(7), "Sun");
    }

    #[test]
    fn test_months_are_one_based() {
        let t = Language::Fr.translations();
        assert_eq!(t.month(1), "Janvier");
        assert_eq!(t.month(8), "Août");
        assert_eq!(t.month(12), "Décembre");
    }

    #[test]
    fn test_section_labels_per_language() {
        assert_eq!(Language::Es.translations().planning, "Planificación Semanal");
        assert_eq!(Language::De.translations().notes, "Notizen");
        assert_eq!(Language::Fr.translations().week, "Semaine");
        assert_eq!(Language::En.translations().reflections, "Weekly Reflections");
    }
}
