mod tests_solution;
