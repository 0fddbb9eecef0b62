//! Helper methods appended to the generated class on demand

use super::LeveledStatement;

/// Name of the new-window polling helper
pub const WAIT_FOR_WINDOW: &str = "waitForWindow";

/// A helper method and the statements that define it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraMethod {
    pub name: &'static str,
    pub statements: Vec<LeveledStatement>,
}

/// `waitForWindow($I, $handles, $timeout)`: poll until a handle not in
/// `$handles` shows up and return it
pub fn wait_for_window() -> ExtraMethod {
    let lines: &[(usize, &str)] = &[
        (0, "public function waitForWindow(AcceptanceTester $I, array $windowHandles, int $timeout)"),
        (0, "{"),
        (1, "return $I->executeInSelenium(function (\\Facebook\\WebDriver\\Remote\\RemoteWebDriver $webdriver) use ($windowHandles, $timeout) {"),
        (2, "$deadline = microtime(true) + $timeout / 1000;"),
        (2, "while (microtime(true) < $deadline) {"),
        (3, "$newHandles = array_values(array_diff($webdriver->getWindowHandles(), $windowHandles));"),
        (3, "if (count($newHandles) > 0) {"),
        (4, "return $newHandles[0];"),
        (3, "}"),
        (3, "usleep(100000);"),
        (2, "}"),
        (2, "throw new \\RuntimeException('new window did not appear within ' . $timeout . 'ms');"),
        (1, "});"),
        (0, "}"),
    ];
    ExtraMethod {
        name: WAIT_FOR_WINDOW,
        statements: lines
            .iter()
            .map(|(level, s)| LeveledStatement::new(*level, *s))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_for_window_is_balanced() {
        let method = wait_for_window();
        assert_eq!(method.name, "waitForWindow");
        let opens: usize = method.statements.iter().map(|s| s.statement.matches('{').count()).sum();
        let closes: usize = method.statements.iter().map(|s| s.statement.matches('}').count()).sum();
        assert_eq!(opens, closes);
        assert!(method.statements[0].statement.contains("function waitForWindow"));
    }
}
