mod plain_tests;
